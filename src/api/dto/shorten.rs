//! DTOs for short link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The account creating (and subsequently owning) the link.
    pub user_id: i64,

    /// The destination URL (must be valid HTTP/HTTPS).
    #[validate(url(message = "invalid URL format"))]
    pub original_url: String,

    /// Optional expiry timestamp (UTC). Absent means the link never expires.
    pub expires_at: Option<DateTime<Utc>>,
}

/// A short link as returned to API clients.
#[derive(Debug, Serialize)]
pub struct ShortLinkResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ShortLinkResponse {
    /// Builds the response from a stored link and its public short URL.
    pub fn from_link(link: ShortLink, short_url: String) -> Self {
        Self {
            short_code: link.short_code,
            short_url,
            original_url: link.original_url,
            expires_at: link.expires_at,
            created_at: link.created_at,
        }
    }
}

/// Request body for deleting a link; identifies the requester for the
/// ownership check.
#[derive(Debug, Deserialize)]
pub struct DeleteLinkRequest {
    pub user_id: i64,
}

/// Generic confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
