//! DTO for the click counter endpoint.

use serde::Serialize;

/// Current click count of a link.
#[derive(Debug, Serialize)]
pub struct ClicksResponse {
    pub clicks: u64,
}
