//! Browser-facing pages.
//!
//! A home page listing live links with a creation form, and the form
//! submission handler. Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Referrer check for form posts
//! - [`routes`] - Page route configuration

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
