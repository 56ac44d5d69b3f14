//! In-memory registry of short identifiers.
//!
//! A single [`parking_lot::RwLock`] guards the whole map. Reads share the lock;
//! every mutation (create, click increment, eviction, sweep) holds the write
//! lock only for the map operation itself. No `.await` or I/O happens while a
//! guard is alive.
//!
//! Expired records are never returned but may linger until either a lookup
//! notices them (lazy eviction) or [`Registry::sweep`] runs.

use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::entities::{Record, RecordView};
use crate::utils::url_validator::validate_target;

pub use crate::utils::code_generator::{CodeSource, RandomCodes};

/// Default lifetime of a link when the caller does not specify one.
pub const DEFAULT_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Upper bound on generated-code retries before giving up.
pub const MAX_GENERATION_ATTEMPTS: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("invalid target URL: {0}")]
    InvalidTarget(String),

    #[error("ttl must be positive and representable")]
    InvalidTtl,

    #[error("name already in use: {0}")]
    NameConflict(String),

    #[error("short link not found: {0}")]
    NotFound(String),

    #[error("no free identifier after {attempts} attempts")]
    KeyspaceExhausted { attempts: usize },
}

struct Inner {
    records: HashMap<String, Record>,
    codes: Box<dyn CodeSource>,
}

impl Inner {
    fn free_code(&mut self) -> Result<String, RegistryError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = self.codes.next_code();
            if !self.records.contains_key(&code) {
                return Ok(code);
            }
            debug!(code = %code, "Generated code collided, retrying");
        }

        Err(RegistryError::KeyspaceExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }
}

/// Concurrent expiring map from identifier to [`Record`].
pub struct Registry {
    inner: RwLock<Inner>,
    clock: Arc<dyn Clock>,
}

impl Registry {
    /// Creates an empty registry using wall-clock time and a time-seeded generator.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::with_parts(clock, Box::new(RandomCodes::from_time()))
    }

    /// Creates a registry with an explicit clock and code source.
    pub fn with_parts(clock: Arc<dyn Clock>, codes: Box<dyn CodeSource>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: HashMap::new(),
                codes,
            }),
            clock,
        }
    }

    /// Current time as seen by this registry.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Stores `target` under a new identifier and returns the identifier.
    ///
    /// With a `custom_label` the label itself becomes the identifier; an empty
    /// label counts as absent. Without one a random code is generated, retrying
    /// on collision up to [`MAX_GENERATION_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidTarget`] if `target` is not an absolute URL with a host
    /// - [`RegistryError::InvalidTtl`] if `ttl` is not positive or overflows the clock
    /// - [`RegistryError::NameConflict`] if the label is already a key, expired or not
    /// - [`RegistryError::KeyspaceExhausted`] if no free code was found
    pub fn create(
        &self,
        target: &str,
        ttl: TimeDelta,
        custom_label: Option<&str>,
    ) -> Result<String, RegistryError> {
        self.insert(target, ttl, custom_label).map(|view| view.code)
    }

    /// Same as [`Self::create`] but returns a snapshot of the new record.
    pub fn insert(
        &self,
        target: &str,
        ttl: TimeDelta,
        custom_label: Option<&str>,
    ) -> Result<RecordView, RegistryError> {
        validate_target(target).map_err(|_| RegistryError::InvalidTarget(target.to_string()))?;

        if ttl <= TimeDelta::zero() {
            return Err(RegistryError::InvalidTtl);
        }

        let now = self.clock.now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or(RegistryError::InvalidTtl)?;
        let custom_label = custom_label.filter(|label| !label.is_empty());

        let mut inner = self.inner.write();

        let code = match custom_label {
            Some(label) => {
                if inner.records.contains_key(label) {
                    return Err(RegistryError::NameConflict(label.to_string()));
                }
                label.to_string()
            }
            None => inner.free_code()?,
        };

        let record = Record::new(
            target.to_string(),
            now,
            expires_at,
            custom_label.map(str::to_string),
        );
        let view = RecordView::from_record(&code, &record);
        inner.records.insert(code, record);
        drop(inner);

        debug!(code = %view.code, expires_at = %expires_at, "Link created");
        Ok(view)
    }

    /// Returns the target of a live record.
    ///
    /// Does not count a click; see [`Self::increment_clicks`].
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if the code is absent or expired. An expired
    /// record is evicted as a side effect.
    pub fn resolve(&self, code: &str) -> Result<String, RegistryError> {
        self.read_live(code, |record| record.target.clone())
    }

    /// Returns a snapshot of a live record.
    ///
    /// Same visibility rules as [`Self::resolve`].
    pub fn lookup(&self, code: &str) -> Result<RecordView, RegistryError> {
        self.read_live(code, |record| RecordView::from_record(code, record))
    }

    /// Adds one click to `code`. No-op if absent.
    ///
    /// Expiration is not re-checked here: callers resolve first.
    pub fn increment_clicks(&self, code: &str) {
        if let Some(record) = self.inner.write().records.get_mut(code) {
            record.clicks = record.clicks.saturating_add(1);
        }
    }

    /// True iff `label` is not currently a key, regardless of expiration.
    pub fn is_label_available(&self, label: &str) -> bool {
        !self.inner.read().records.contains_key(label)
    }

    /// Removes every record whose expiry is before `now`. Returns how many went.
    pub fn sweep(&self, now: DateTime<Utc>) -> usize {
        let mut inner = self.inner.write();
        let before = inner.records.len();
        inner.records.retain(|_, record| record.expires_at >= now);
        before - inner.records.len()
    }

    /// Snapshots of all unexpired records, ordered by code.
    pub fn live_records(&self) -> Vec<RecordView> {
        let now = self.clock.now();
        let mut views: Vec<RecordView> = self
            .inner
            .read()
            .records
            .iter()
            .filter(|(_, record)| !record.is_expired_at(now))
            .map(|(code, record)| RecordView::from_record(code, record))
            .collect();

        views.sort_by(|a, b| a.code.cmp(&b.code));
        views
    }

    /// Number of unexpired records.
    pub fn live_len(&self) -> usize {
        let now = self.clock.now();
        self.inner
            .read()
            .records
            .values()
            .filter(|record| !record.is_expired_at(now))
            .count()
    }

    /// Number of stored records, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }

    fn read_live<T>(&self, code: &str, read: impl FnOnce(&Record) -> T) -> Result<T, RegistryError> {
        let now = self.clock.now();

        {
            let inner = self.inner.read();
            match inner.records.get(code) {
                None => return Err(RegistryError::NotFound(code.to_string())),
                Some(record) if !record.is_expired_at(now) => return Ok(read(record)),
                Some(_) => {}
            }
        }

        self.evict_if_expired(code, now);
        Err(RegistryError::NotFound(code.to_string()))
    }

    /// Removes `code` only if the record currently stored under it is expired.
    ///
    /// The key may have been swept and re-created between dropping the read
    /// guard and taking the write guard.
    fn evict_if_expired(&self, code: &str, now: DateTime<Utc>) {
        let mut inner = self.inner.write();
        if let Some(record) = inner.records.get(code)
            && record.is_expired_at(now)
        {
            inner.records.remove(code);
            debug!(code = %code, "Evicted expired link on lookup");
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
