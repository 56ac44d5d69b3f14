//! Plain-text API documentation.

use axum::{http::header, response::IntoResponse};

const API_DOCS: &str = r#"API Documentation:

1. Shorten URL
   Endpoint: POST /api/shorten
   Headers: X-API-Key: <your api key>
   Body: {
       "long_url": "https://example.com",
       "custom_name": "optional-custom-name",
       "expires_in": "24h"
   }
   expires_in accepts <number><unit> segments with unit s, m or h
   (e.g. 30s, 15m, 1h30m, 24h). Defaults to the server's default lifetime.
   Responses: 200 created, 400 invalid input, 401 bad key, 409 name in use

2. Get URL Info
   Endpoint: GET /api/url?code=<short_code>
   Headers: X-API-Key: <your api key>
   Responses: 200 {long_url, clicks, expires_at, created_at, custom_name?}, 404 unknown or expired

3. Click Count
   Endpoint: GET /clicks/<short_code>
   Responses: 200 {"clicks": n}, 404 unknown or expired
"#;

/// Serves the API documentation.
///
/// # Endpoint
///
/// `GET /api/docs`
pub async fn docs_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], API_DOCS)
}
