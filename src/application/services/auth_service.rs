//! Access checks performed before any registry call.

use serde_json::json;
use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Service guarding the API and the HTML creation form.
///
/// The API key is kept only as a SHA-256 digest; presented keys are hashed
/// and compared digest to digest, so comparison time does not depend on how
/// many leading bytes of the raw key match.
pub struct AuthService {
    key_digest: [u8; 32],
    allowed_referrers: Vec<String>,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `api_key` - shared secret expected in the `X-API-Key` header
    /// - `allowed_referrers` - URL prefixes accepted in the `Referer` header of form posts
    pub fn new(api_key: &str, allowed_referrers: Vec<String>) -> Self {
        Self {
            key_digest: hash_key(api_key),
            allowed_referrers,
        }
    }

    /// Checks a presented API key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the key is missing or wrong.
    pub fn authenticate(&self, presented: Option<&str>) -> Result<(), AppError> {
        let Some(presented) = presented else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "X-API-Key header is missing" }),
            ));
        };

        if hash_key(presented) != self.key_digest {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid API key" }),
            ));
        }

        Ok(())
    }

    /// Checks that a form submission came from one of our own pages.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] if the referrer is missing or foreign.
    pub fn check_referrer(&self, referer: Option<&str>) -> Result<(), AppError> {
        let allowed = referer.is_some_and(|referer| {
            self.allowed_referrers
                .iter()
                .any(|prefix| referer.starts_with(prefix.as_str()))
        });

        if !allowed {
            return Err(AppError::forbidden(
                "Forbidden",
                json!({ "reason": "Request did not originate from an allowed page" }),
            ));
        }

        Ok(())
    }
}

fn hash_key(key: &str) -> [u8; 32] {
    Sha256::digest(key.as_bytes()).into()
}
