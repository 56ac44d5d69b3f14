//! Referrer check for the HTML creation form.

use axum::{
    extract::{Request, State},
    http::header::REFERER,
    middleware::Next,
    response::Response,
};

use crate::state::AppState;
use crate::web::error::WebError;

/// Rejects form posts that were not submitted from one of our pages.
///
/// The `Referer` header must start with one of the configured prefixes
/// (see `ALLOWED_REFERRERS`). Browsers send it automatically on same-origin
/// form submissions.
///
/// # Errors
///
/// Renders a `403 Forbidden` page if the header is missing or foreign.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let referer = req.headers().get(REFERER).and_then(|v| v.to_str().ok());

    if let Err(err) = st.auth_service.check_referrer(referer) {
        tracing::warn!(referer = ?referer, "Rejected form post with foreign referrer");
        return Err(err.into());
    }

    Ok(next.run(req).await)
}
