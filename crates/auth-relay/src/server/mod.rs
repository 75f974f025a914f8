//! HTTP server assembly and lifecycle.
//!
//! [`AuthServer`] owns the configuration and the session store, wires both
//! into the router, and drives the listener until shutdown.

pub mod redirect;
pub mod routes;
pub mod store;

use std::net::SocketAddr;

use anyhow::Context;

use crate::config::Config;
use store::SessionStore;

/// The auth relay server.
pub struct AuthServer {
    /// Startup configuration.
    config: Config,

    /// Single-slot session store shared with the request handlers.
    sessions: SessionStore,
}

impl AuthServer {
    /// Create a server with an empty session slot.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config, sessions: SessionStore::new() }
    }

    /// The session store the handlers operate on.
    #[must_use]
    pub const fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Bind the listening socket and serve until interrupted.
    ///
    /// # Errors
    ///
    /// Returns an error if the socket cannot be bound or the serve loop
    /// fails; callers are expected to exit non-zero on either.
    pub async fn run(self) -> anyhow::Result<()> {
        let port = self.config.port;
        let router = routes::create_router(port, self.sessions.clone());
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        tracing::info!("Auth server running at http://localhost:{port}");
        tracing::info!("Open this URL in your browser to authenticate");

        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("Auth server shut down");
        Ok(())
    }
}

impl std::fmt::Debug for AuthServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthServer").field("port", &self.config.port).finish()
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.expect("Failed to install CTRL+C handler");
    tracing::info!("Received shutdown signal");
}
