//! Auth relay server - entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use auth_relay::{config::Config, server::AuthServer};

#[derive(Parser, Debug)]
#[command(name = "auth-relay")]
#[command(about = "Localhost HTTP relay for browser-based login")]
#[command(version)]
struct Cli {
    /// Port to run the server on
    #[arg(long, short = 'p', default_value = "8080", env = "PORT")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), port = cli.port, "Starting auth relay");

    let server = AuthServer::new(Config::new(cli.port));
    server.run().await
}
