//! Store trait for short code to URL record mappings.

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Concurrent-safe mapping from short code to [`UrlRecord`].
///
/// The store owns all mutable state. Every operation is atomic with respect
/// to the others: no caller ever observes a partially updated record, and
/// concurrent [`increment_clicks`](UrlStore::increment_clicks) calls on the
/// same code never lose an update. Operations may briefly block on an
/// internal lock but never on I/O.
///
/// Callers receive snapshots, never live handles into the store.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::MemoryUrlStore`] - lock-guarded map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Inserts a fresh record for `code` with `clicks = 0` and
    /// `created_at = now`, silently overwriting any existing entry.
    ///
    /// Uniqueness is not checked at this layer; that is the allocation
    /// loop's responsibility. Returns a snapshot of the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store's lock is poisoned.
    async fn insert(&self, code: &str, long_url: &str) -> Result<UrlRecord, AppError>;

    /// Atomically inserts a fresh record only if `code` is not yet present.
    ///
    /// Returns `true` if the record was inserted, `false` if the code was
    /// already taken (in which case the existing record is untouched).
    /// Check and insert happen under one critical section, so two concurrent
    /// callers can never both claim the same code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store's lock is poisoned.
    async fn insert_if_absent(&self, code: &str, long_url: &str) -> Result<bool, AppError>;

    /// Retrieves a snapshot of the record for `code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if the code is known
    /// - `Ok(None)` if it is not
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store's lock is poisoned.
    async fn get(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Atomically increments the click counter of `code`.
    ///
    /// Returns whether the code was present. If absent, nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store's lock is poisoned.
    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError>;

    /// Number of links currently stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store's lock is poisoned.
    async fn len(&self) -> Result<usize, AppError>;
}
