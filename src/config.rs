//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `API_KEY` - Shared secret expected in the `X-API-Key` header of `/api/*` calls
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `BASE_URL` - Public prefix of short links (default: `http://localhost:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEFAULT_TTL` - Lifetime of links created without `expires_in` (default: `24h`)
//! - `SWEEP_INTERVAL_SECONDS` - Period of the expiry sweep (default: 300, range: 1-86400)
//! - `ALLOWED_REFERRERS` - Comma-separated URL prefixes accepted on form posts
//!   (default: `{BASE_URL}/`)
//!
//! ```bash
//! export API_KEY="change-me"
//! export BASE_URL="https://s.example.com"
//! export DEFAULT_TTL="1h30m"
//! ```

use anyhow::{Context, Result};
use chrono::TimeDelta;
use std::env;
use std::time::Duration;

use crate::domain::registry::DEFAULT_TTL_SECONDS;
use crate::utils::ttl::{format_ttl, parse_ttl};

const DEFAULT_LISTEN: &str = "0.0.0.0:8080";
const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_SWEEP_INTERVAL_SECONDS: u64 = 300;
const MAX_SWEEP_INTERVAL_SECONDS: u64 = 86_400;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public prefix of short links, without trailing slash.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// Lifetime applied when a request carries no `expires_in`.
    pub default_ttl: TimeDelta,
    pub sweep_interval_seconds: u64,
    /// Loaded from `API_KEY`. Must be non-empty.
    pub api_key: String,
    /// URL prefixes accepted in the `Referer` header of `POST /shorten`.
    pub allowed_referrers: Vec<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_KEY` is missing or a value cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
        let base_url = env::var("BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let default_ttl = match env::var("DEFAULT_TTL") {
            Ok(raw) => parse_ttl(&raw)
                .with_context(|| format!("DEFAULT_TTL is not a valid duration: '{raw}'"))?,
            Err(_) => TimeDelta::seconds(DEFAULT_TTL_SECONDS),
        };

        let sweep_interval_seconds = match env::var("SWEEP_INTERVAL_SECONDS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("SWEEP_INTERVAL_SECONDS must be an integer, got '{raw}'"))?,
            Err(_) => DEFAULT_SWEEP_INTERVAL_SECONDS,
        };

        let api_key = env::var("API_KEY").context("API_KEY must be set")?;

        let allowed_referrers = Self::load_allowed_referrers(&base_url);

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            default_ttl,
            sweep_interval_seconds,
            api_key,
            allowed_referrers,
        })
    }

    /// Reads `ALLOWED_REFERRERS`, falling back to pages under `base_url`.
    fn load_allowed_referrers(base_url: &str) -> Vec<String> {
        let parsed: Vec<String> = env::var("ALLOWED_REFERRERS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|prefix| !prefix.is_empty())
            .map(str::to_string)
            .collect();

        if parsed.is_empty() {
            vec![format!("{base_url}/")]
        } else {
            parsed
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `base_url` is not an http(s) URL
    /// - `sweep_interval_seconds` is out of range
    /// - `api_key` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.sweep_interval_seconds == 0
            || self.sweep_interval_seconds > MAX_SWEEP_INTERVAL_SECONDS
        {
            anyhow::bail!(
                "SWEEP_INTERVAL_SECONDS must be between 1 and {}, got {}",
                MAX_SWEEP_INTERVAL_SECONDS,
                self.sweep_interval_seconds
            );
        }

        if self.api_key.is_empty() {
            anyhow::bail!("API_KEY must not be empty");
        }

        Ok(())
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_seconds)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Default TTL: {}", format_ttl(self.default_ttl));
        tracing::info!("  Sweep interval: {}s", self.sweep_interval_seconds);
        tracing::info!("  API key: {}", mask_secret(&self.api_key));
        tracing::info!("  Allowed referrers: {}", self.allowed_referrers.join(", "));
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for logging, keeping only its length.
fn mask_secret(secret: &str) -> String {
    format!("*** ({} chars)", secret.chars().count())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
