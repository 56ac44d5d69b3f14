//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /` and `/home`   - Home page (public)
//! - `POST /shorten`        - Form submission (referrer check)
//! - `GET  /{code}`         - Short link redirect (public)
//! - `GET  /clicks/{code}`  - Click counter (public)
//! - `GET  /health`         - Health check (public)
//! - `/api/*`               - JSON API (`X-API-Key` required, except `/api/docs`)
//! - `/static/*`            - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - API key (API) or referrer check (form)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{clicks_handler, health_handler, redirect_handler};
use crate::api::middleware::{api_key, tracing};
use crate::state::AppState;
use crate::web;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Directory served under `/static`.
pub const STATIC_DIR: &str = "static";

/// Constructs the router with all routes and middleware, without path
/// normalization.
pub fn router(state: AppState) -> Router {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), api_key::layer))
        .merge(api::routes::public_routes());

    Router::new()
        .merge(web::routes::routes(state.clone()))
        .route("/{code}", get(redirect_handler))
        .route("/clicks/{code}", get(clicks_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router, trimming trailing slashes before
/// routing so `/abc123/` resolves like `/abc123`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
