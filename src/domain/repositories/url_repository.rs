//! Repository trait for the URL store.

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for short URL records.
///
/// Every operation performs real I/O against durable storage; there is no
/// in-memory cache layer in front of it.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Returns true iff a record with the given code is present.
    ///
    /// Safe to call concurrently with inserts: once an insert has committed
    /// there is no false negative.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Creates a new record with `clicks = 0` and the current UTC timestamp.
    ///
    /// Uniqueness is enforced by the storage layer itself, not by a prior
    /// `exists` check, so the race between check and insert is closed here.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasTaken`] if the code is already present.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn insert(&self, new_url: NewUrl) -> Result<UrlRecord, AppError>;

    /// Returns the full record for a code, or `None` if unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Atomically increments the click counter for a code.
    ///
    /// A silent no-op when the code does not exist. The only caller runs
    /// this after a successful lookup, and no delete operation exists, so
    /// in practice the update always matches a row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, code: &str) -> Result<(), AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
