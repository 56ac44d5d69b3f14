//! HTTP middleware for request processing and protection.
//!
//! Provides API key authentication and access logging.

pub mod api_key;
pub mod tracing;
