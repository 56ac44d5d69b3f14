//! Web-specific middleware.

pub mod referrer;
