//! Short code generation and custom label validation.
//!
//! Generated codes are 6 characters over `[a-zA-Z0-9]` (62^6, about 5.7e10
//! combinations). The generator is a seeded PRNG, not a CSPRNG: codes are not
//! meant to be unguessable, only unlikely to collide.

use chrono::Utc;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::error::AppError;
use serde_json::json;

/// Alphabet for generated codes.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated codes.
pub const CODE_LENGTH: usize = 6;

/// Maximum length of a caller-chosen label.
pub const MAX_LABEL_LENGTH: usize = 64;

/// Labels that would shadow a route.
pub const RESERVED_LABELS: &[&str] = &["api", "clicks", "health", "home", "qr", "shorten", "static"];

/// Produces candidate identifiers for the registry.
///
/// The registry keeps asking until it gets a free key or gives up, so an
/// implementation may return duplicates.
pub trait CodeSource: Send + Sync {
    fn next_code(&mut self) -> String;
}

/// Default [`CodeSource`] backed by a time-seeded [`StdRng`].
pub struct RandomCodes {
    rng: StdRng,
}

impl RandomCodes {
    /// Seeds the generator from the current time.
    pub fn from_time() -> Self {
        let seed = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CodeSource for RandomCodes {
    fn next_code(&mut self) -> String {
        generate_code(&mut self.rng)
    }
}

/// Generates one random code of [`CODE_LENGTH`] characters from [`ALPHABET`].
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-provided custom label.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_label(label: &str) -> Result<(), AppError> {
    if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
        return Err(AppError::bad_request(
            format!("Custom name must be 1-{MAX_LABEL_LENGTH} characters"),
            json!({ "provided_length": label.len() }),
        ));
    }

    if !label
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom name can only contain letters, digits, hyphens and underscores",
            json!({ "custom_name": label }),
        ));
    }

    if RESERVED_LABELS.contains(&label.to_ascii_lowercase().as_str()) {
        return Err(AppError::bad_request(
            "This name is reserved",
            json!({ "custom_name": label }),
        ));
    }

    Ok(())
}
