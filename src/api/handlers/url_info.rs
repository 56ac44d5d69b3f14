//! Handler for link information lookups.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::url_info::{UrlInfoQuery, UrlInfoResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns target, click count and expiry of a live link.
///
/// # Endpoint
///
/// `GET /api/url?code=<code>` (requires `X-API-Key`)
///
/// Does not count a click.
///
/// # Errors
///
/// - 400 Bad Request if `code` is missing
/// - 404 Not Found if the link is absent or expired
pub async fn url_info_handler(
    State(state): State<AppState>,
    Query(query): Query<UrlInfoQuery>,
) -> Result<Json<UrlInfoResponse>, AppError> {
    let code = query
        .code
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::bad_request("Missing short code", json!({ "param": "code" })))?;

    let view = state.link_service.info(code)?;

    Ok(Json(view.into()))
}
