//! DTOs for registration and login endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to register a new account.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64, message = "username must be 1-64 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 128, message = "password must be 1-128 characters"))]
    pub password: String,
}

/// Request to log in to an existing account.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Response for successful registration or login.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub message: &'static str,
    pub user_id: i64,
}
