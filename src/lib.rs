//! # Volatile Shortener
//!
//! A small URL shortening service built with Axum whose links live only in
//! process memory and expire after a configurable lifetime.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Link records, the in-memory registry, clock and sweeper
//! - **Application Layer** ([`application`]) - Input validation and service orchestration
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML form and link listing
//!
//! ## Features
//!
//! - Random 6-character codes or caller-chosen custom names
//! - Per-link lifetimes (`30m`, `1h30m`, ...) with lazy and periodic expiry
//! - Click counting on redirect
//! - API key authentication for the JSON API
//!
//! ## Quick Start
//!
//! ```bash
//! export API_KEY="change-me"
//! cargo run
//!
//! curl -X POST http://localhost:8080/api/shorten \
//!   -H "X-API-Key: change-me" -H "Content-Type: application/json" \
//!   -d '{"long_url": "https://example.com", "expires_in": "1h"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, CreatedLink, LinkService};
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::entities::{Record, RecordView};
    pub use crate::domain::registry::{Registry, RegistryError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
