//! Repository trait for user account data access.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user.
    ///
    /// Username uniqueness is enforced by the storage layer; a violation of
    /// that constraint surfaces as [`AppError::DuplicateUsername`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateUsername`] if the username is taken.
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
}
