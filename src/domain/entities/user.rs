//! User entity representing a registered account.

use chrono::{DateTime, Utc};

/// A registered account.
///
/// `password_hash` is an argon2 PHC string produced by the account service;
/// the plaintext password never appears on this type.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}
