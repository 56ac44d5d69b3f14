//! Record entity representing a live short identifier.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored URL mapping.
///
/// `target` and `expires_at` never change after creation; only `clicks` does.
#[derive(Debug, Clone)]
pub struct Record {
    pub target: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub custom_label: Option<String>,
    pub clicks: u64,
}

impl Record {
    /// Creates a record with zero clicks.
    pub fn new(
        target: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        custom_label: Option<String>,
    ) -> Self {
        Self {
            target,
            created_at,
            expires_at,
            custom_label,
            clicks: 0,
        }
    }

    /// Returns true once `now` is strictly past the expiry instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Point-in-time copy of a record together with its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordView {
    pub code: String,
    pub target: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub custom_label: Option<String>,
    pub clicks: u64,
}

impl RecordView {
    pub fn from_record(code: &str, record: &Record) -> Self {
        Self {
            code: code.to_string(),
            target: record.target.clone(),
            created_at: record.created_at,
            expires_at: record.expires_at,
            custom_label: record.custom_label.clone(),
            clicks: record.clicks,
        }
    }
}
