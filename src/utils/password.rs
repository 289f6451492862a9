//! Password hashing with Argon2id.
//!
//! Hashes carry a per-call random salt inside the PHC string, so the raw
//! output is non-deterministic while verification stays possible from the
//! stored hash alone. Plaintext passwords are never logged or stored.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::AppError;

/// Hashes a plaintext password into an argon2id PHC string.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the hasher fails, which only happens on
/// invalid parameters and is a programming fault, not a caller mistake.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!("password hashing failed: {e}");
            AppError::Internal
        })
}

/// Verifies a plaintext password against a stored PHC string.
///
/// Uses argon2's own verifier, which recomputes with the embedded salt and
/// compares in constant time. Never compares plaintext.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the stored hash cannot be parsed.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| {
        tracing::error!("stored password hash is malformed: {e}");
        AppError::Internal
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
