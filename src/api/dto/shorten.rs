//! DTOs for the JSON shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// ```json
/// { "long_url": "https://example.com", "custom_name": "docs", "expires_in": "24h" }
/// ```
///
/// Custom names are checked by the link service after trimming, the same
/// rule the HTML form goes through.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[validate(url(message = "Invalid URL format"))]
    pub long_url: String,

    /// Optional custom short code.
    pub custom_name: Option<String>,

    /// Optional lifetime such as `30m`, `1h30m` or `24h`.
    pub expires_in: Option<String>,
}

impl ShortenRequest {
    /// Strips surrounding whitespace from the URL before validation.
    pub fn trimmed(mut self) -> Self {
        self.long_url = self.long_url.trim().to_string();
        self
    }
}

/// Created link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
}
