//! Configuration for the auth relay server.

/// Fixed protocol paths and defaults.
pub mod defaults {
    /// Default listening port.
    pub const PORT: u16 = 8080;

    /// Path on the external service that starts the login flow.
    pub const LOGIN_PATH: &str = "/user/login";

    /// Local path the external service redirects the browser back to.
    pub const CALLBACK_PATH: &str = "/callback";

    /// Where the browser lands after a successful callback.
    pub const SUCCESS_REDIRECT: &str = "/?success=true";
}

/// Server configuration.
///
/// The listening port is the only tunable; everything else about the
/// relay is fixed protocol shape.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on. Also feeds the callback URI
    /// handed to the external service.
    pub port: u16,
}

impl Config {
    /// Create a configuration listening on the given port.
    #[must_use]
    pub const fn new(port: u16) -> Self {
        Self { port }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(defaults::PORT)
    }
}
