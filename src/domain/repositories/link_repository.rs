//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Outcome of an insert attempt.
///
/// Alias collisions are arbitrated by the storage uniqueness constraint at
/// write time, so a taken code is an ordinary outcome the link service retries
/// with a fresh candidate, not an error.
#[derive(Debug, Clone)]
pub enum LinkInsert {
    Created(ShortLink),
    CodeTaken,
}

/// Repository interface for short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Inserts a new short link in a single atomic statement.
    ///
    /// Returns [`LinkInsert::CodeTaken`] when the candidate code violates the
    /// `short_code` uniqueness constraint (including codes held by deleted
    /// rows, which are never reissued).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn insert(&self, new_link: NewShortLink) -> Result<LinkInsert, AppError>;

    /// Finds a link by its short code, including soft-deleted rows.
    ///
    /// Callers decide how deleted and expired rows are reported.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Soft-deletes a link by id, setting `deleted_at = now()`.
    ///
    /// Returns `Ok(true)` if the link was live and is now deleted, `Ok(false)`
    /// if it was already deleted (e.g. a concurrent delete won the race).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn soft_delete(&self, id: i64) -> Result<bool, AppError>;
}
