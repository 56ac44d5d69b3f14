//! Handler for the JSON shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten` (requires `X-API-Key`)
///
/// # Request Body
///
/// ```json
/// {
///   "long_url": "https://example.com",
///   "custom_name": "optional-custom-name",
///   "expires_in": "24h"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:8080/abc123",
///   "code": "abc123",
///   "expires_at": "2025-01-02T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request: malformed body, invalid URL, malformed `expires_in`, invalid name
/// - 409 Conflict: `custom_name` is already in use
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let payload = payload.trimmed();
    payload.validate()?;

    let link = state.link_service.shorten(
        &payload.long_url,
        payload.expires_in.as_deref(),
        payload.custom_name.as_deref(),
    )?;

    Ok(Json(ShortenResponse {
        short_url: link.short_url,
        code: link.code,
        expires_at: link.expires_at,
    }))
}
