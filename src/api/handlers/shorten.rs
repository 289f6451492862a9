//! Handlers for short link endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::shorten::{
    DeleteLinkRequest, MessageResponse, ShortLinkResponse, ShortenRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Errors
///
/// Returns 400 Bad Request on validation failure, 500 if alias generation
/// fails or the alias space is exhausted, 503 if storage is unavailable.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortLinkResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create(payload.user_id, &payload.original_url, payload.expires_at)
        .await?;

    let short_url = state.link_service.short_url(&link.short_code);

    Ok(Json(ShortLinkResponse::from_link(link, short_url)))
}

/// Resolves a short code back to its destination.
///
/// # Endpoint
///
/// `GET /shorten/{code}`
///
/// # Errors
///
/// Returns 404 Not Found for unknown or deleted codes, 410 Gone once the
/// expiry has passed.
pub async fn resolve_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ShortLinkResponse>, AppError> {
    let link = state.link_service.resolve(&code).await?;

    let short_url = state.link_service.short_url(&link.short_code);

    Ok(Json(ShortLinkResponse::from_link(link, short_url)))
}

/// Deletes a short link on behalf of its owner.
///
/// # Endpoint
///
/// `DELETE /shorten/{code}`
///
/// # Errors
///
/// Returns 404 Not Found for unknown or already-deleted codes and
/// 403 Forbidden when the requester does not own the link.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(payload): Json<DeleteLinkRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.link_service.delete(&code, payload.user_id).await?;

    Ok(Json(MessageResponse {
        message: "short link deleted",
    }))
}
