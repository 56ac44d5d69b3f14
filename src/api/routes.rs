//! API route configuration.
//!
//! Protected endpoints require the `X-API-Key` header, checked by
//! [`crate::api::middleware::api_key`].

use crate::api::handlers::{docs_handler, shorten_handler, url_info_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// API routes protected by the API key gate.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a short link
/// - `GET  /url`     - Describe a live link (`?code=`)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/url", get(url_info_handler))
}

/// API routes available without a key.
///
/// # Endpoints
///
/// - `GET /docs` - Plain-text API documentation
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/docs", get(docs_handler))
}
