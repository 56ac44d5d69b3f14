//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code in the registry (expired links count as missing)
/// 2. Count the click
/// 3. Return `302 Found` with `Location: <target>`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist or has expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target = state.link_service.resolve_and_count(&code)?;
    debug!(code = %code, "Redirecting");

    let location = location_header(&target)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds a `Location` value, percent-encoding the target if it has
/// characters a header cannot carry.
fn location_header(target: &str) -> Result<HeaderValue, AppError> {
    if target.is_ascii()
        && let Ok(value) = HeaderValue::from_str(target)
    {
        return Ok(value);
    }

    Url::parse(target)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::internal("Stored target cannot be used as a redirect", json!({}))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_header_plain_ascii() {
        let value = location_header("https://example.com/a?b=c").unwrap();
        assert_eq!(value, "https://example.com/a?b=c");
    }

    #[test]
    fn test_location_header_encodes_unicode_path() {
        let value = location_header("https://example.com/привет").unwrap();
        assert!(value.to_str().unwrap().starts_with("https://example.com/%D0%BF"));
    }
}
