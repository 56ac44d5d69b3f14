//! DTOs for the link information endpoint.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::RecordView;

/// Query string of `GET /api/url`.
#[derive(Debug, Deserialize)]
pub struct UrlInfoQuery {
    pub code: Option<String>,
}

/// Public description of a live link.
#[derive(Debug, Serialize)]
pub struct UrlInfoResponse {
    pub long_url: String,
    pub clicks: u64,
    /// RFC 3339 timestamp.
    pub expires_at: String,
    pub created_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
}

impl From<RecordView> for UrlInfoResponse {
    fn from(view: RecordView) -> Self {
        Self {
            long_url: view.target,
            clicks: view.clicks,
            expires_at: view.expires_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            created_at: view.created_at,
            custom_name: view.custom_label,
        }
    }
}
