//! HTTP routes for the auth relay.
//!
//! Five endpoints compose the session store and the redirect builder into
//! the relay's entire surface: the embedded index page, the login
//! redirect, the callback that captures the session, the session query,
//! and logout. There are no others.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::redirect;
use super::store::SessionStore;
use crate::assets;
use crate::config::defaults;
use crate::error::ApiError;

/// Shared state for HTTP handlers.
pub struct HttpState {
    /// Listening port, fixed at startup; feeds the callback URI.
    pub port: u16,

    /// The single-slot session store.
    pub sessions: SessionStore,
}

/// Query parameters for `/login`.
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    api_url: Option<String>,
}

/// Query parameters for `/callback`.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    session_id: Option<String>,
}

/// Body of the `/session` response.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Stored identifier, empty when no session is active.
    pub session_id: String,
}

/// Create the HTTP router.
///
/// The store is injected rather than constructed here so the server
/// instance stays the single owner of session state.
pub fn create_router(port: u16, sessions: SessionStore) -> Router {
    let state = Arc::new(HttpState { port, sessions });

    Router::new()
        .route("/", get(handle_index))
        .route("/login", get(handle_login))
        .route("/callback", get(handle_callback))
        .route("/logout", get(handle_logout).post(handle_logout))
        .route("/session", get(handle_session))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /`
///
/// Serve the embedded login page verbatim.
async fn handle_index() -> Result<Response, ApiError> {
    let page =
        assets::lookup(assets::INDEX).ok_or(ApiError::AssetNotFound { path: assets::INDEX })?;
    Ok(Html(page).into_response())
}

/// `GET /login`
///
/// Redirect the browser to the external service's login endpoint, with
/// this server's callback as the `redirect_uri`.
async fn handle_login(
    State(state): State<Arc<HttpState>>,
    Query(query): Query<LoginQuery>,
) -> Result<Response, ApiError> {
    // An empty value is as missing as an absent one.
    let api_url = match query.api_url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => return Err(ApiError::MissingApiUrl),
    };

    let login_url = redirect::build_login_url(api_url, state.port);
    tracing::info!(url = %login_url, "Redirecting to login");

    Ok((StatusCode::FOUND, [("Location", login_url)]).into_response())
}

/// `GET /callback`
///
/// Capture the session identifier handed back by the external service,
/// then send the browser to the index page with a success marker.
async fn handle_callback(
    State(state): State<Arc<HttpState>>,
    Query(query): Query<CallbackQuery>,
) -> Result<Response, ApiError> {
    let session_id = match query.session_id {
        Some(id) if !id.is_empty() => id,
        _ => {
            tracing::error!("Missing session_id in callback");
            return Err(ApiError::MissingSessionId);
        }
    };

    state.sessions.set(session_id.clone()).await;
    tracing::info!(session_id = %session_id, "Authentication successful");

    Ok((StatusCode::FOUND, [("Location", defaults::SUCCESS_REDIRECT)]).into_response())
}

/// `GET|POST /logout`
///
/// Clear the stored session. Always responds 200, whether or not a
/// session existed.
async fn handle_logout(State(state): State<Arc<HttpState>>) -> StatusCode {
    let previous = state.sessions.clear().await;
    if !previous.is_empty() {
        tracing::info!(session_id = %previous, "Logged out, session cleared");
    }
    StatusCode::OK
}

/// `GET /session`
///
/// Report the stored identifier as JSON.
async fn handle_session(State(state): State<Arc<HttpState>>) -> Json<SessionResponse> {
    let session_id = state.sessions.get().await;
    Json(SessionResponse { session_id })
}
