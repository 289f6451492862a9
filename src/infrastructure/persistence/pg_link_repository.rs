//! PostgreSQL implementation of the short link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{LinkInsert, ShortLinkRepository};
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on;

/// Constraint backing the alias uniqueness invariant. It covers soft-deleted
/// rows too, so retired codes stay claimed.
const SHORT_CODE_UNIQUE: &str = "short_links_short_code_key";

/// PostgreSQL repository for short link storage and retrieval.
///
/// Every mutation is a single statement, so each record is written or
/// removed atomically even if the caller aborts mid-request.
pub struct PgShortLinkRepository {
    pool: Arc<PgPool>,
}

impl PgShortLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortLinkRepository for PgShortLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<LinkInsert, AppError> {
        let result = sqlx::query_as::<_, ShortLink>(
            r#"
            INSERT INTO short_links (user_id, original_url, short_code, expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, original_url, short_code, expires_at, created_at, deleted_at
            "#,
        )
        .bind(new_link.owner_id)
        .bind(&new_link.original_url)
        .bind(&new_link.short_code)
        .bind(new_link.expires_at)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(link) => Ok(LinkInsert::Created(link)),
            Err(e) if is_unique_violation_on(&e, SHORT_CODE_UNIQUE) => Ok(LinkInsert::CodeTaken),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let link = sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT id, user_id, original_url, short_code, expires_at, created_at, deleted_at
            FROM short_links
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE short_links
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
