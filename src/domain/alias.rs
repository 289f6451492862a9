//! Alias generation strategy interface.

use crate::error::AppError;
use async_trait::async_trait;

/// Strategy for producing candidate short codes.
///
/// Implementations must emit short, URL-safe candidates. Determinism is not
/// required; collision detection and retry belong to the link service, which
/// asks for a fresh candidate when the storage layer reports the code taken.
///
/// # Implementations
///
/// - [`crate::infrastructure::alias::RandomAlias`] - self-hosted random codes (default)
/// - [`crate::infrastructure::alias::HttpProviderAlias`] - delegation to an
///   external shortening provider, bounded by a timeout
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasGenerator: Send + Sync {
    /// Produces a candidate short code for the given destination URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::GenerationFailed`] when the strategy cannot
    /// produce a candidate (entropy failure, provider unreachable, timeout).
    /// The failure is always surfaced so the caller can fail the request
    /// instead of silently swallowing it.
    async fn generate(&self, original_url: &str) -> Result<String, AppError>;

    /// Human-readable strategy name, used in logs.
    fn name(&self) -> &'static str;
}
