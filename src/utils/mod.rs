//! Utility functions for code generation, input validation and durations.
//!
//! This module provides helper functions used across the application:
//!
//! - [`code_generator`] - Short code generation and custom label validation
//! - [`ttl`] - Parsing and formatting of `1h30m`-style lifetimes
//! - [`url_validator`] - Destination URL checks

pub mod code_generator;
pub mod ttl;
pub mod url_validator;
