//! Handlers for registration and login endpoints.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::account::{AccountResponse, LoginRequest, RegisterRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the username is taken.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    payload.validate()?;

    let user = state
        .account_service
        .register(&payload.username, &payload.password)
        .await?;

    Ok(Json(AccountResponse {
        message: "account created",
        user_id: user.id,
    }))
}

/// Authenticates an existing account.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Errors
///
/// Returns 400 Bad Request with a single `invalid_credentials` kind for both
/// unknown usernames and wrong passwords.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    payload.validate()?;

    let user = state
        .account_service
        .authenticate(&payload.username, &payload.password)
        .await?;

    Ok(Json(AccountResponse {
        message: "login successful",
        user_id: user.id,
    }))
}
