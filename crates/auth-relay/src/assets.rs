//! Static assets compiled into the binary.
//!
//! Paths mirror the on-disk layout under the crate root, and lookups stay
//! fallible so a missing asset surfaces as an HTTP 500 instead of a panic.

/// Path of the login page served at `/`.
pub const INDEX: &str = "static/index.html";

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Look up an embedded asset by path.
#[must_use]
pub fn lookup(path: &str) -> Option<&'static str> {
    match path {
        INDEX => Some(INDEX_HTML),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_embedded() {
        let page = lookup(INDEX).expect("index page should be embedded");
        assert!(page.contains("<title>Auth Relay</title>"));
    }

    #[test]
    fn test_unknown_path_is_none() {
        assert!(lookup("static/missing.html").is_none());
        assert!(lookup("").is_none());
    }
}
