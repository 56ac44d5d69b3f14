//! Destination URL shape checks.

use url::Url;

/// Reasons a destination string is not an acceptable absolute URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute URL with a non-empty scheme and host.
///
/// The string is not rewritten; callers store exactly what was validated.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_target("https://example.com/path").is_ok());
/// assert!(validate_target("example.com").is_err());      // no scheme
/// assert!(validate_target("mailto:me@example.com").is_err()); // no host
/// ```
pub fn validate_target(input: &str) -> Result<(), UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid_target(input: &str) -> bool {
        validate_target(input).is_ok()
    }

    #[test]
    fn test_accepts_http_and_https() {
        assert!(is_valid_target("https://example.com"));
        assert!(is_valid_target("http://example.com/a/b?c=d#e"));
    }

    #[test]
    fn test_accepts_other_schemes_with_host() {
        assert!(is_valid_target("ftp://files.example.com/readme.txt"));
    }

    #[test]
    fn test_accepts_ip_host_with_port() {
        assert!(is_valid_target("http://127.0.0.1:8080/health"));
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert!(matches!(
            validate_target("example.com/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_missing_host() {
        assert_eq!(
            validate_target("mailto:someone@example.com"),
            Err(UrlValidationError::MissingHost)
        );
    }

    #[test]
    fn test_rejects_empty_and_garbage() {
        assert!(!is_valid_target(""));
        assert!(!is_valid_target("not a url"));
        assert!(!is_valid_target("https://"));
    }
}
