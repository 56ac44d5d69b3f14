//! Application layer services implementing business logic.
//!
//! Services sit between HTTP handlers and the registry: they validate raw
//! input, apply defaults and translate domain errors into [`crate::error::AppError`].
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, resolution and queries
//! - [`services::auth_service::AuthService`] - API key and referrer checks

pub mod services;
