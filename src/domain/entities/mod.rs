//! Core data structures stored by the registry.

pub mod record;

pub use record::{Record, RecordView};
