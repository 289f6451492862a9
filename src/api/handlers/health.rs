//! Handler for the health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Liveness check with a database ping.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Errors
///
/// Returns 503 Service Unavailable if the database does not answer.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, AppError> {
    sqlx::query("SELECT 1").execute(state.db.as_ref()).await?;

    Ok(Json(HealthResponse {
        status: "ok",
        database: "up",
    }))
}
