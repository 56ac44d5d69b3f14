//! Link creation and resolution service.

use chrono::{DateTime, TimeDelta, Utc};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::domain::entities::RecordView;
use crate::domain::registry::Registry;
use crate::error::AppError;
use crate::utils::code_generator::validate_custom_label;
use crate::utils::ttl::parse_ttl;
use crate::utils::url_validator::validate_target;

/// Result of a successful shorten request.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
    pub expires_at: DateTime<Utc>,
}

/// Request-level front of the [`Registry`].
///
/// Turns raw form/JSON input into registry calls: trims and validates input,
/// applies the default lifetime and maps registry errors to [`AppError`].
pub struct LinkService {
    registry: Arc<Registry>,
    default_ttl: TimeDelta,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public prefix of short links, e.g. `https://s.example.com`.
    pub fn new(registry: Arc<Registry>, default_ttl: TimeDelta, base_url: impl Into<String>) -> Self {
        Self {
            registry,
            default_ttl,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn default_ttl(&self) -> TimeDelta {
        self.default_ttl
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `long_url` - destination; must be an absolute URL with a host
    /// - `expires_in` - lifetime such as `30m` or `24h`; default lifetime if absent
    /// - `custom_label` - caller-chosen code; generated if absent
    ///
    /// Blank strings count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - URL is missing or invalid
    /// - Duration is malformed
    /// - Custom label is invalid
    ///
    /// Returns [`AppError::Conflict`] if the custom label is taken.
    pub fn shorten(
        &self,
        long_url: &str,
        expires_in: Option<&str>,
        custom_label: Option<&str>,
    ) -> Result<CreatedLink, AppError> {
        let long_url = long_url.trim();
        if long_url.is_empty() {
            return Err(AppError::bad_request("URL is required", json!({})));
        }

        validate_target(long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let ttl = match non_blank(expires_in) {
            Some(raw) => parse_ttl(raw).map_err(|e| {
                AppError::bad_request(
                    "Invalid expiration duration",
                    json!({ "expires_in": raw, "reason": e.to_string() }),
                )
            })?,
            None => self.default_ttl,
        };

        let custom_label = non_blank(custom_label);
        if let Some(label) = custom_label {
            validate_custom_label(label)?;
        }

        let view = self.registry.insert(long_url, ttl, custom_label)?;

        info!(code = %view.code, custom = custom_label.is_some(), "Short link created");

        Ok(CreatedLink {
            short_url: self.short_url(&view.code),
            code: view.code,
            long_url: view.target,
            expires_at: view.expires_at,
        })
    }

    /// Resolves `code` and counts the click.
    ///
    /// The two registry calls are not atomic: a sweep in between makes the
    /// increment a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link is absent or expired.
    pub fn resolve_and_count(&self, code: &str) -> Result<String, AppError> {
        let target = self.registry.resolve(code)?;
        self.registry.increment_clicks(code);
        Ok(target)
    }

    /// Current click count of a live link.
    pub fn clicks(&self, code: &str) -> Result<u64, AppError> {
        Ok(self.registry.lookup(code)?.clicks)
    }

    /// Full snapshot of a live link.
    pub fn info(&self, code: &str) -> Result<RecordView, AppError> {
        Ok(self.registry.lookup(code)?)
    }

    /// All live links, ordered by code.
    pub fn live_links(&self) -> Vec<RecordView> {
        self.registry.live_records()
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::{Clock, ManualClock};

    fn service() -> (LinkService, ManualClock) {
        let clock = ManualClock::new(Utc::now());
        let registry = Arc::new(Registry::with_clock(Arc::new(clock.clone())));
        (
            LinkService::new(registry, TimeDelta::hours(24), "https://s.example.com/"),
            clock,
        )
    }

    #[test]
    fn test_shorten_uses_default_ttl() {
        let (service, clock) = service();

        let link = service.shorten("https://example.com", None, None).unwrap();

        assert_eq!(link.expires_at, clock.now() + TimeDelta::hours(24));
        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.code.len(), 6);
    }

    #[test]
    fn test_shorten_builds_short_url_without_double_slash() {
        let (service, _) = service();

        let link = service
            .shorten("https://example.com", None, Some("docs"))
            .unwrap();

        assert_eq!(link.short_url, "https://s.example.com/docs");
    }

    #[test]
    fn test_shorten_parses_expires_in() {
        let (service, clock) = service();

        let link = service
            .shorten("https://example.com", Some("90m"), None)
            .unwrap();

        assert_eq!(link.expires_at, clock.now() + TimeDelta::minutes(90));
    }

    #[test]
    fn test_blank_inputs_are_absent() {
        let (service, clock) = service();

        let link = service
            .shorten("  https://example.com  ", Some("  "), Some(""))
            .unwrap();

        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.code.len(), 6);
        assert_eq!(link.expires_at, clock.now() + TimeDelta::hours(24));
    }

    #[test]
    fn test_missing_url() {
        let (service, _) = service();

        let err = service.shorten("   ", None, None).unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn test_invalid_url() {
        let (service, _) = service();

        let err = service.shorten("not-a-url", None, None).unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert!(service.live_links().is_empty());
    }

    #[test]
    fn test_malformed_duration_rejected_before_registry() {
        let (service, _) = service();

        let err = service
            .shorten("https://example.com", Some("tomorrow"), Some("later"))
            .unwrap_err();

        assert!(err.to_string().contains("Invalid expiration"));
        assert!(service.registry().is_label_available("later"));
    }

    #[test]
    fn test_reserved_label_rejected() {
        let (service, _) = service();

        let err = service
            .shorten("https://example.com", None, Some("api"))
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_label_conflict_is_client_error() {
        let (service, _) = service();
        service
            .shorten("https://a.com", None, Some("mylink"))
            .unwrap();

        let err = service
            .shorten("https://b.com", None, Some("mylink"))
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(service.info("mylink").unwrap().target, "https://a.com");
    }

    #[test]
    fn test_resolve_and_count() {
        let (service, _) = service();
        let link = service.shorten("https://example.com", None, None).unwrap();

        for _ in 0..3 {
            assert_eq!(
                service.resolve_and_count(&link.code).unwrap(),
                "https://example.com"
            );
        }

        assert_eq!(service.clicks(&link.code).unwrap(), 3);
    }

    #[test]
    fn test_expired_link_not_found() {
        let (service, clock) = service();
        let link = service
            .shorten("https://example.com", Some("1m"), None)
            .unwrap();

        clock.advance(TimeDelta::minutes(2));

        assert!(matches!(
            service.resolve_and_count(&link.code),
            Err(AppError::NotFound { .. })
        ));
        assert!(matches!(
            service.clicks(&link.code),
            Err(AppError::NotFound { .. })
        ));
    }
}
