//! Authorization URL construction for the login redirect.

use url::form_urlencoded;

use crate::config::defaults;

/// The local URI the external service sends the browser back to.
///
/// Fixed per server instance as a function of the listening port.
#[must_use]
pub fn callback_uri(port: u16) -> String {
    format!("http://localhost:{port}{}", defaults::CALLBACK_PATH)
}

/// Build the external login URL for the given API base.
///
/// The base URL is used verbatim; callers must supply a well-formed
/// absolute URL without a trailing slash or the result will be malformed.
/// Only the embedded callback URI is percent-encoded.
#[must_use]
pub fn build_login_url(api_url: &str, port: u16) -> String {
    let redirect_uri: String =
        form_urlencoded::byte_serialize(callback_uri(port).as_bytes()).collect();
    format!("{api_url}{}?redirect_uri={redirect_uri}", defaults::LOGIN_PATH)
}
