//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Account storage and lookup
//! - [`PgShortLinkRepository`] - Short link storage, lookup, and soft deletion

pub mod pg_link_repository;
pub mod pg_user_repository;

pub use pg_link_repository::PgShortLinkRepository;
pub use pg_user_repository::PgUserRepository;
