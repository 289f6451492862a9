//! Short link entity representing an alias-to-URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL owned by a user.
///
/// Deletion is a soft delete: the row stays in storage with `deleted_at` set,
/// which keeps the alias under the `short_code` uniqueness constraint so it
/// is never reissued.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShortLink {
    pub id: i64,
    #[sqlx(rename = "user_id")]
    pub owner_id: i64,
    pub original_url: String,
    pub short_code: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ShortLink {
    /// Returns true if the link has been deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns true if the link has passed its expiry time.
    ///
    /// A link with no expiry never expires. Comparison uses a single UTC
    /// clock source; a link expiring exactly now is still resolvable.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e < now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Input data for creating a new short link.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub owner_id: i64,
    pub original_url: String,
    pub short_code: String,
    pub expires_at: Option<DateTime<Utc>>,
}
