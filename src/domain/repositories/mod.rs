//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Account storage and lookup
//! - [`ShortLinkRepository`] - Short link storage, lookup, and soft deletion

pub mod link_repository;
pub mod user_repository;

pub use link_repository::{LinkInsert, ShortLinkRepository};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use link_repository::MockShortLinkRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
