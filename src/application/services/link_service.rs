//! Short link creation, resolution, and deletion service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::AliasGenerator;
use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{LinkInsert, ShortLinkRepository};
use crate::error::AppError;
use crate::utils::url_normalizer::normalize_url;

/// Service owning the short link lifecycle.
///
/// Coordinates the alias generator with the repository: candidates are
/// inserted directly and the storage uniqueness constraint arbitrates
/// collisions, so concurrent creates racing on one candidate are safe and
/// losers simply retry with a fresh code.
pub struct LinkService {
    links: Arc<dyn ShortLinkRepository>,
    aliases: Arc<dyn AliasGenerator>,
    base_url: String,
    max_alias_attempts: u32,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `max_alias_attempts` bounds the collision retry loop per create call.
    pub fn new(
        links: Arc<dyn ShortLinkRepository>,
        aliases: Arc<dyn AliasGenerator>,
        base_url: String,
        max_alias_attempts: u32,
    ) -> Self {
        Self {
            links,
            aliases,
            base_url,
            max_alias_attempts,
        }
    }

    /// Creates a short link for `owner_id` pointing at `original_url`.
    ///
    /// The URL is normalized and validated first; alias candidates are then
    /// requested from the generator until one survives the write-time
    /// uniqueness check, up to the configured number of attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty or malformed URL.
    /// Returns [`AppError::GenerationFailed`] if the generator cannot
    /// produce a candidate.
    /// Returns [`AppError::AliasSpaceExhausted`] if every attempt collided.
    pub async fn create(
        &self,
        owner_id: i64,
        original_url: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<ShortLink, AppError> {
        let normalized_url =
            normalize_url(original_url).map_err(|e| AppError::bad_request(e.to_string()))?;

        for attempt in 1..=self.max_alias_attempts {
            let short_code = self.aliases.generate(&normalized_url).await?;

            let inserted = self
                .links
                .insert(NewShortLink {
                    owner_id,
                    original_url: normalized_url.clone(),
                    short_code,
                    expires_at,
                })
                .await?;

            match inserted {
                LinkInsert::Created(link) => {
                    debug!(
                        code = %link.short_code,
                        owner_id,
                        strategy = self.aliases.name(),
                        "short link created"
                    );
                    return Ok(link);
                }
                LinkInsert::CodeTaken => {
                    debug!(attempt, "alias collided, retrying with a fresh candidate");
                }
            }
        }

        Err(AppError::AliasSpaceExhausted {
            attempts: self.max_alias_attempts,
        })
    }

    /// Resolves a short code to its link.
    ///
    /// Expiry is checked lazily here; expired rows stay in storage but are
    /// no longer resolvable. Deleted links report [`AppError::NotFound`],
    /// which is their terminal state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if absent or deleted, and
    /// [`AppError::Expired`] if the expiry has passed.
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        let link = self
            .links
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)?;

        if link.is_deleted() {
            return Err(AppError::NotFound);
        }

        if link.is_expired() {
            return Err(AppError::Expired);
        }

        Ok(link)
    }

    /// Deletes a short link on behalf of `requester_id`.
    ///
    /// Only the owner may delete. Deletion is a soft delete so the alias is
    /// never reissued; a second delete of the same code reports
    /// [`AppError::NotFound`], the expected terminal state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if absent or already deleted, and
    /// [`AppError::Forbidden`] if the requester does not own the link (the
    /// record is left unchanged).
    pub async fn delete(&self, code: &str, requester_id: i64) -> Result<(), AppError> {
        let link = self
            .links
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)?;

        if link.is_deleted() {
            return Err(AppError::NotFound);
        }

        if link.owner_id != requester_id {
            return Err(AppError::Forbidden);
        }

        // A concurrent delete may have won the race since the lookup.
        if !self.links.soft_delete(link.id).await? {
            return Err(AppError::NotFound);
        }

        debug!(code, owner_id = requester_id, "short link deleted");

        Ok(())
    }

    /// Constructs the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockAliasGenerator;
    use crate::domain::repositories::MockShortLinkRepository;
    use chrono::Duration;

    fn service(
        links: MockShortLinkRepository,
        aliases: MockAliasGenerator,
        max_attempts: u32,
    ) -> LinkService {
        LinkService::new(
            Arc::new(links),
            Arc::new(aliases),
            "https://sho.rt".to_string(),
            max_attempts,
        )
    }

    fn stored_link(id: i64, owner_id: i64, code: &str, url: &str) -> ShortLink {
        ShortLink {
            id,
            owner_id,
            original_url: url.to_string(),
            short_code: code.to_string(),
            expires_at: None,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    fn fixed_alias(code: &'static str) -> MockAliasGenerator {
        let mut aliases = MockAliasGenerator::new();
        aliases.expect_generate().returning(move |_| Ok(code.to_string()));
        aliases.expect_name().return_const("random");
        aliases
    }

    #[tokio::test]
    async fn test_create_success() {
        let mut mock_links = MockShortLinkRepository::new();
        mock_links
            .expect_insert()
            .withf(|new_link| {
                new_link.owner_id == 7
                    && new_link.short_code == "abc123"
                    && new_link.original_url == "https://example.com/"
            })
            .times(1)
            .returning(|new_link| {
                Ok(LinkInsert::Created(stored_link(
                    1,
                    new_link.owner_id,
                    &new_link.short_code,
                    &new_link.original_url,
                )))
            });

        let service = service(mock_links, fixed_alias("abc123"), 10);

        let link = service.create(7, "https://example.com", None).await.unwrap();

        assert_eq!(link.short_code, "abc123");
        assert_eq!(link.original_url, "https://example.com/");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_url() {
        let mut mock_links = MockShortLinkRepository::new();
        mock_links.expect_insert().times(0);

        let mut aliases = MockAliasGenerator::new();
        aliases.expect_generate().times(0);

        let service = service(mock_links, aliases, 10);

        for bad in ["", "not-a-url", "ftp://example.com/x"] {
            let result = service.create(7, bad, None).await;
            assert!(matches!(result, Err(AppError::Validation { .. })), "{bad}");
        }
    }

    #[tokio::test]
    async fn test_create_retries_on_write_time_collision() {
        let mut mock_links = MockShortLinkRepository::new();
        let mut call = 0;
        mock_links.expect_insert().times(2).returning(move |new_link| {
            call += 1;
            if call == 1 {
                Ok(LinkInsert::CodeTaken)
            } else {
                Ok(LinkInsert::Created(stored_link(
                    2,
                    new_link.owner_id,
                    &new_link.short_code,
                    &new_link.original_url,
                )))
            }
        });

        let mut aliases = MockAliasGenerator::new();
        let mut n = 0;
        aliases.expect_generate().times(2).returning(move |_| {
            n += 1;
            Ok(format!("code{n}"))
        });
        aliases.expect_name().return_const("random");

        let service = service(mock_links, aliases, 10);

        let link = service.create(7, "https://example.com", None).await.unwrap();

        // The colliding candidate was discarded, not reused.
        assert_eq!(link.short_code, "code2");
    }

    #[tokio::test]
    async fn test_create_alias_space_exhausted_after_bounded_attempts() {
        let mut mock_links = MockShortLinkRepository::new();
        mock_links
            .expect_insert()
            .times(3)
            .returning(|_| Ok(LinkInsert::CodeTaken));

        let service = service(mock_links, fixed_alias("taken"), 3);

        let result = service.create(7, "https://example.com", None).await;

        assert!(matches!(
            result,
            Err(AppError::AliasSpaceExhausted { attempts: 3 })
        ));
    }

    #[tokio::test]
    async fn test_create_surfaces_generation_failure() {
        let mut mock_links = MockShortLinkRepository::new();
        mock_links.expect_insert().times(0);

        let mut aliases = MockAliasGenerator::new();
        aliases
            .expect_generate()
            .times(1)
            .returning(|_| Err(AppError::generation_failed("provider unreachable")));

        let service = service(mock_links, aliases, 10);

        let result = service.create(7, "https://example.com", None).await;
        assert!(matches!(result, Err(AppError::GenerationFailed { .. })));
    }

    #[tokio::test]
    async fn test_resolve_success() {
        let mut mock_links = MockShortLinkRepository::new();
        mock_links
            .expect_find_by_code()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(Some(stored_link(1, 7, "abc123", "https://example.com/"))));

        let service = service(mock_links, MockAliasGenerator::new(), 10);

        let link = service.resolve("abc123").await.unwrap();
        assert_eq!(link.original_url, "https://example.com/");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_links = MockShortLinkRepository::new();
        mock_links
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(mock_links, MockAliasGenerator::new(), 10);

        assert!(matches!(
            service.resolve("missing").await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_resolve_expired_link() {
        let mut mock_links = MockShortLinkRepository::new();
        mock_links.expect_find_by_code().times(1).returning(|_| {
            let mut link = stored_link(1, 7, "old", "https://example.com/");
            link.expires_at = Some(Utc::now() - Duration::seconds(1));
            Ok(Some(link))
        });

        let service = service(mock_links, MockAliasGenerator::new(), 10);

        assert!(matches!(
            service.resolve("old").await,
            Err(AppError::Expired)
        ));
    }

    #[tokio::test]
    async fn test_resolve_deleted_link_reports_not_found() {
        let mut mock_links = MockShortLinkRepository::new();
        mock_links.expect_find_by_code().times(1).returning(|_| {
            let mut link = stored_link(1, 7, "gone", "https://example.com/");
            link.deleted_at = Some(Utc::now());
            Ok(Some(link))
        });

        let service = service(mock_links, MockAliasGenerator::new(), 10);

        assert!(matches!(
            service.resolve("gone").await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_resolve_link_without_expiry_survives_clock_advance() {
        let link = stored_link(1, 7, "keep", "https://example.com/");
        assert!(!link.is_expired_at(Utc::now() + Duration::days(365)));
    }

    #[tokio::test]
    async fn test_delete_by_owner() {
        let mut mock_links = MockShortLinkRepository::new();
        mock_links
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(Some(stored_link(5, 7, "abc123", "https://example.com/"))));
        mock_links
            .expect_soft_delete()
            .withf(|id| *id == 5)
            .times(1)
            .returning(|_| Ok(true));

        let service = service(mock_links, MockAliasGenerator::new(), 10);

        assert!(service.delete("abc123", 7).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_by_non_owner_is_forbidden_and_leaves_record() {
        let mut mock_links = MockShortLinkRepository::new();
        mock_links
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(Some(stored_link(5, 7, "abc123", "https://example.com/"))));
        mock_links.expect_soft_delete().times(0);

        let service = service(mock_links, MockAliasGenerator::new(), 10);

        assert!(matches!(
            service.delete("abc123", 99).await,
            Err(AppError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_link() {
        let mut mock_links = MockShortLinkRepository::new();
        mock_links
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(mock_links, MockAliasGenerator::new(), 10);

        assert!(matches!(
            service.delete("missing", 7).await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_second_delete_reports_not_found() {
        let mut mock_links = MockShortLinkRepository::new();
        mock_links.expect_find_by_code().times(1).returning(|_| {
            let mut link = stored_link(5, 7, "abc123", "https://example.com/");
            link.deleted_at = Some(Utc::now());
            Ok(Some(link))
        });
        mock_links.expect_soft_delete().times(0);

        let service = service(mock_links, MockAliasGenerator::new(), 10);

        assert!(matches!(
            service.delete("abc123", 7).await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_race_reports_not_found() {
        let mut mock_links = MockShortLinkRepository::new();
        mock_links
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(Some(stored_link(5, 7, "abc123", "https://example.com/"))));
        // Another request soft-deleted the row between lookup and update.
        mock_links
            .expect_soft_delete()
            .times(1)
            .returning(|_| Ok(false));

        let service = service(mock_links, MockAliasGenerator::new(), 10);

        assert!(matches!(
            service.delete("abc123", 7).await,
            Err(AppError::NotFound)
        ));
    }

    #[test]
    fn test_short_url_joins_base_and_code() {
        let service = LinkService::new(
            Arc::new(MockShortLinkRepository::new()),
            Arc::new(MockAliasGenerator::new()),
            "https://sho.rt/".to_string(),
            10,
        );

        assert_eq!(service.short_url("abc123"), "https://sho.rt/abc123");
    }
}
