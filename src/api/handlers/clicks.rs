//! Handler for the public click counter.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::clicks::ClicksResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Reports how many times a link has been followed.
///
/// # Endpoint
///
/// `GET /clicks/{code}`
///
/// Polled by the result page to refresh its counter; does not count a click.
///
/// # Errors
///
/// Returns 404 Not Found if the link is absent or expired.
pub async fn clicks_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ClicksResponse>, AppError> {
    let clicks = state.link_service.clicks(&code)?;
    Ok(Json(ClicksResponse { clicks }))
}
