//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// The registry is in-process, so the service is healthy whenever it can
/// answer; the check reports how many records are currently stored.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "registry": { "status": "ok", "message": "3 live of 4 stored links" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            registry: check_registry(&state),
        },
    })
}

fn check_registry(state: &AppState) -> CheckStatus {
    let registry = state.link_service.registry();
    let stored = registry.len();
    let live = registry.live_len();

    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("{live} live of {stored} stored links")),
    }
}
