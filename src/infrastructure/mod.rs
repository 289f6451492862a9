//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`alias`] - Alias generation strategies (random, external provider)

pub mod alias;
pub mod persistence;
