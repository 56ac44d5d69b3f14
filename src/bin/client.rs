//! Command-line client for the shortener's JSON API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts for the URL if --url is omitted)
//! cargo run --bin client -- shorten --url https://example.com --expires 1h
//!
//! # Use a custom name
//! cargo run --bin client -- shorten --url https://example.com --custom docs
//!
//! # Inspect a link by code or by full short URL
//! cargo run --bin client -- info docs
//! cargo run --bin client -- info http://localhost:8080/docs
//!
//! # Exercise the API's error responses
//! cargo run --bin client -- check
//! ```
//!
//! # Environment Variables
//!
//! - `API_BASE_URL` - Server address (default: `http://localhost:8080`)
//! - `API_KEY` (required): value sent in the `X-API-Key` header

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use thiserror::Error;

/// CLI client for volatile-shortener.
#[derive(Parser)]
#[command(name = "client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Server address
    #[arg(long, env = "API_BASE_URL", default_value = "http://localhost:8080")]
    base_url: String,

    /// API key sent as `X-API-Key`
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a short link
    Shorten {
        /// URL to shorten
        #[arg(short, long)]
        url: Option<String>,

        /// Custom name to use instead of a generated code
        #[arg(short, long)]
        custom: Option<String>,

        /// Lifetime such as `30m`, `1h30m` or `24h`
        #[arg(short, long, default_value = "24h")]
        expires: String,
    },

    /// Show a link's target, clicks and expiry
    Info {
        /// Short code or full short URL
        code: String,
    },

    /// Run requests that the server must reject
    Check,
}

#[derive(Debug, Deserialize)]
struct ShortenResponse {
    short_url: String,
    code: String,
    expires_at: String,
}

#[derive(Debug, Deserialize)]
struct UrlInfoResponse {
    long_url: String,
    clicks: u64,
    expires_at: String,
    created_at: String,
    custom_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, Deserialize)]
struct ErrorInfo {
    code: String,
    message: String,
}

/// Failed API call.
#[derive(Debug, Error)]
#[error("{} {message}", .status.as_u16())]
struct ApiFailure {
    status: StatusCode,
    message: String,
}

/// Thin wrapper over the JSON API.
struct ApiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn with_key(&self, api_key: &str) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            api_key: api_key.to_string(),
        }
    }

    async fn shorten(
        &self,
        long_url: &str,
        custom_name: Option<&str>,
        expires_in: &str,
    ) -> Result<std::result::Result<ShortenResponse, ApiFailure>> {
        let body = json!({
            "long_url": long_url,
            "custom_name": custom_name,
            "expires_in": expires_in,
        });

        let response = self
            .http
            .post(format!("{}/api/shorten", self.base_url))
            .header("X-API-Key", &self.api_key)
            .json(&body)
            .send()
            .await
            .context("Failed to reach the server")?;

        decode(response).await
    }

    async fn info(&self, code: &str) -> Result<std::result::Result<UrlInfoResponse, ApiFailure>> {
        let response = self
            .http
            .get(format!("{}/api/url", self.base_url))
            .query(&[("code", code)])
            .header("X-API-Key", &self.api_key)
            .send()
            .await
            .context("Failed to reach the server")?;

        decode(response).await
    }

    /// Accepts either a bare code or a short URL under `base_url`.
    fn code_of<'a>(&self, input: &'a str) -> &'a str {
        input
            .strip_prefix(self.base_url.as_str())
            .map(|rest| rest.trim_start_matches('/'))
            .unwrap_or(input)
    }
}

/// Splits a response into a decoded body or the server's error message.
///
/// Transport and decoding problems are the outer error.
async fn decode<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
) -> Result<std::result::Result<T, ApiFailure>> {
    let status = response.status();

    if status.is_success() {
        let body = response.json::<T>().await.context("Unexpected response body")?;
        return Ok(Ok(body));
    }

    let body: Value = response.json().await.unwrap_or(Value::Null);
    let message = serde_json::from_value::<ErrorBody>(body)
        .map(|b| format!("{} ({})", b.error.message, b.error.code))
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("error").to_string());

    Ok(Err(ApiFailure { status, message }))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = ApiClient::new(&cli.base_url, &cli.api_key);

    match cli.command {
        Commands::Shorten {
            url,
            custom,
            expires,
        } => shorten(&client, url, custom, expires).await?,
        Commands::Info { code } => info(&client, &code).await?,
        Commands::Check => check(&client).await?,
    }

    Ok(())
}

async fn shorten(
    client: &ApiClient,
    url: Option<String>,
    custom: Option<String>,
    expires: String,
) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("URL to shorten")
            .with_initial_text("https://")
            .interact_text()?,
    };

    match client.shorten(&url, custom.as_deref(), &expires).await? {
        Ok(link) => {
            println!("{}", "✅ Short link created".green().bold());
            println!();
            println!("  Code:    {}", link.code.cyan());
            println!("  URL:     {}", link.short_url.bright_yellow().bold());
            println!("  Expires: {}", link.expires_at.bright_black());
            println!();
        }
        Err(failure) => {
            println!("{} {}", "❌ Request failed:".red().bold(), failure);
            anyhow::bail!("shorten failed");
        }
    }

    Ok(())
}

async fn info(client: &ApiClient, input: &str) -> Result<()> {
    let code = client.code_of(input);

    println!("{} {}", "📋 Link".bright_blue().bold(), code.cyan());
    println!();

    match client.info(code).await? {
        Ok(link) => {
            println!("  Target:  {}", link.long_url.bright_white());
            println!("  Clicks:  {}", link.clicks.to_string().bright_white().bold());
            println!("  Created: {}", link.created_at.bright_black());
            println!("  Expires: {}", link.expires_at.bright_black());
            if let Some(name) = link.custom_name {
                println!("  Custom:  {}", name.cyan());
            }
            println!();
        }
        Err(failure) => {
            println!("{} {}", "❌ Request failed:".red().bold(), failure);
            anyhow::bail!("info failed");
        }
    }

    Ok(())
}

/// Sends requests that must fail and reports whether each one did.
async fn check(client: &ApiClient) -> Result<()> {
    println!("{}", "🧪 Error case checks".bright_blue().bold());
    println!();

    let mut failed = 0;

    let cases = [
        (
            "Invalid URL",
            client.shorten("not-a-valid-url", None, "1h").await?.err(),
            StatusCode::BAD_REQUEST,
        ),
        (
            "Invalid expiration",
            client
                .shorten("https://example.com", None, "invalid-time")
                .await?
                .err(),
            StatusCode::BAD_REQUEST,
        ),
        (
            "Unknown code",
            client.info("nonexistent").await?.err(),
            StatusCode::NOT_FOUND,
        ),
        (
            "Invalid API key",
            client
                .with_key("invalid-key")
                .shorten("https://example.com", None, "1h")
                .await?
                .err(),
            StatusCode::UNAUTHORIZED,
        ),
    ];

    for (name, failure, expected) in cases {
        if !report(name, failure, expected) {
            failed += 1;
        }
    }

    let label = format!("check-{}", chrono::Utc::now().timestamp_millis());
    let conflict = match client.shorten("https://example.com", Some(&label), "1m").await? {
        Ok(_) => client
            .shorten("https://example.org", Some(&label), "1m")
            .await?
            .err(),
        Err(failure) => Some(failure),
    };
    if !report("Custom name conflict", conflict, StatusCode::CONFLICT) {
        failed += 1;
    }

    println!();
    if failed == 0 {
        println!("{}", "✅ All checks passed".green().bold());
        Ok(())
    } else {
        println!("{}", format!("❌ {failed} check(s) failed").red().bold());
        anyhow::bail!("{failed} check(s) failed")
    }
}

fn report(name: &str, failure: Option<ApiFailure>, expected: StatusCode) -> bool {
    match failure {
        Some(f) if f.status == expected => {
            println!("  {} {:<22} {}", "✓".green(), name, f.to_string().bright_black());
            true
        }
        Some(f) => {
            println!(
                "  {} {:<22} expected {}, got {}",
                "✗".red(),
                name,
                expected.as_u16(),
                f
            );
            false
        }
        None => {
            println!("  {} {:<22} expected {}, request succeeded", "✗".red(), name, expected.as_u16());
            false
        }
    }
}
