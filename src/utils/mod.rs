//! Utility functions shared across the application:
//!
//! - [`codegen`] - Random short code generation
//! - [`password`] - Argon2id password hashing and verification
//! - [`url_normalizer`] - Destination URL normalization and validation
//! - [`db_error`] - Database constraint error classification

pub mod codegen;
pub mod db_error;
pub mod password;
pub mod url_normalizer;
