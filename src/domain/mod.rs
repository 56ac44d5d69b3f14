//! Domain layer: the in-memory link registry and the tasks around it.
//!
//! # Architecture
//!
//! - [`entities`] - Stored record and its snapshot view
//! - [`registry`] - Concurrent expiring map from short code to record
//! - [`clock`] - Time source abstraction used for expiration
//! - [`sweeper`] - Periodic background purge of expired records
//!
//! # Request Flow
//!
//! 1. Creation goes through [`registry::Registry::insert`]
//! 2. The redirect handler calls `resolve` then `increment_clicks`
//! 3. [`sweeper::run_sweeper`] calls `sweep` on a fixed interval
//!
//! The registry owns all locking; callers never hold a guard.

pub mod clock;
pub mod entities;
pub mod registry;
pub mod sweeper;
