//! Parsing of human-written link lifetimes such as `30m`, `24h` or `1h30m`.

use chrono::TimeDelta;
use regex::Regex;
use std::sync::LazyLock;

/// Whole-string shape: one or more `<number><unit>` segments.
static TTL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+(?:\.\d+)?[hms])+$").unwrap());

/// A single `<number><unit>` segment.
static TTL_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)([hms])").unwrap());

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TtlParseError {
    #[error("Duration is empty")]
    Empty,

    #[error("Invalid duration '{0}': expected <number><unit> with unit s, m or h (e.g. 30m, 24h)")]
    Malformed(String),

    #[error("Duration must be greater than zero")]
    NonPositive,

    #[error("Duration is too large")]
    TooLarge,
}

/// Parses a duration like `90s`, `15m`, `1.5h` or `1h30m`.
///
/// Segments are summed; each unit may appear more than once. The result is
/// rounded to whole milliseconds and must be strictly positive.
///
/// # Errors
///
/// See [`TtlParseError`].
pub fn parse_ttl(input: &str) -> Result<TimeDelta, TtlParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(TtlParseError::Empty);
    }

    if !TTL_SHAPE.is_match(input) {
        return Err(TtlParseError::Malformed(input.to_string()));
    }

    let mut total_ms = 0f64;
    for caps in TTL_SEGMENT.captures_iter(input) {
        let value: f64 = caps[1]
            .parse()
            .map_err(|_| TtlParseError::Malformed(input.to_string()))?;

        let unit_ms = match &caps[2] {
            "h" => 3_600_000.0,
            "m" => 60_000.0,
            _ => 1_000.0,
        };
        total_ms += value * unit_ms;
    }

    if !total_ms.is_finite() || total_ms >= i64::MAX as f64 {
        return Err(TtlParseError::TooLarge);
    }

    let ms = total_ms.round() as i64;
    if ms <= 0 {
        return Err(TtlParseError::NonPositive);
    }

    TimeDelta::try_milliseconds(ms).ok_or(TtlParseError::TooLarge)
}

/// Formats a duration in the same notation [`parse_ttl`] accepts.
///
/// Sub-second remainders are dropped.
pub fn format_ttl(ttl: TimeDelta) -> String {
    let total = ttl.num_seconds().max(0);
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    if seconds > 0 || out.is_empty() {
        out.push_str(&format!("{seconds}s"));
    }
    out
}
