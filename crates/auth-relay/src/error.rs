//! Error types for the auth relay.
//!
//! Uses `thiserror` for the error messages and maps each variant onto the
//! HTTP status it is reported with.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors surfaced to HTTP callers.
///
/// Every failure is handled synchronously inside the handler that detects
/// it; nothing is retried or queued.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// `/login` was called without the required `api_url` query parameter.
    #[error("Missing api_url parameter")]
    MissingApiUrl,

    /// `/callback` arrived without a `session_id` to store.
    #[error("Missing session_id in callback")]
    MissingSessionId,

    /// An embedded asset is not present in the binary. Indicates a
    /// packaging defect rather than a runtime condition.
    #[error("Failed to load {path}")]
    AssetNotFound {
        /// Asset path that was looked up.
        path: &'static str,
    },
}

impl ApiError {
    /// HTTP status this error is reported with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingApiUrl | Self::MissingSessionId => StatusCode::BAD_REQUEST,
            Self::AssetNotFound { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
