//! Domain layer containing business entities and ports.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`alias`] - Alias generation strategy trait
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; business logic lives in [`crate::application::services`].

pub mod alias;
pub mod entities;
pub mod repositories;

pub use alias::AliasGenerator;

#[cfg(test)]
pub use alias::MockAliasGenerator;
