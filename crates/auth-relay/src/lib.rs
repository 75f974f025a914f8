//! Auth Relay
//!
//! A minimal localhost HTTP server that brokers a browser-based login
//! against an external authorization service. The browser is redirected
//! to the service's login endpoint, the service redirects back with a
//! session identifier, and the relay holds that single identifier in
//! memory for the operator to query.
//!
//! # Flow
//!
//! 1. `GET /login?api_url=...` redirects the browser to the external
//!    login endpoint with this server's callback as the `redirect_uri`.
//! 2. The service sends the browser back to `GET /callback?session_id=...`,
//!    which stores the identifier.
//! 3. `GET /session` returns the stored identifier as JSON; `POST /logout`
//!    clears it.
//!
//! # Example
//!
//! ```no_run
//! use auth_relay::{config::Config, server::AuthServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let server = AuthServer::new(Config::default());
//!     server.run().await
//! }
//! ```

pub mod assets;
pub mod config;
pub mod error;
pub mod server;

pub use config::Config;
pub use error::ApiError;
pub use server::AuthServer;
