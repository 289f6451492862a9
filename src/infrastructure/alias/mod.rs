//! Alias generation strategies.
//!
//! Implementations of [`crate::domain::AliasGenerator`]:
//!
//! - [`RandomAlias`] - self-hosted random codes (default); the core's
//!   correctness never depends on a third-party service being reachable
//! - [`HttpProviderAlias`] - optional delegation to an external shortening
//!   provider, bounded by a timeout

pub mod provider;
pub mod random;

pub use provider::HttpProviderAlias;
pub use random::RandomAlias;
