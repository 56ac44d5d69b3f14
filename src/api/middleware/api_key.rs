//! Shared-secret authentication middleware for the JSON API.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Authenticates requests using the `X-API-Key` header.
///
/// # Header Format
///
/// ```text
/// X-API-Key: <key>
/// ```
///
/// Runs before the handler, so unauthenticated requests never reach the
/// registry.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing, not valid UTF-8,
/// or does not match the configured key.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/shorten", post(shorten_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), api_key::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    st.auth_service.authenticate(presented)?;

    Ok(next.run(req).await)
}
