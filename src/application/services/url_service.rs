//! Short identifier allocation and mapping lookup.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{UrlMapping, ValidatedUrl};
use crate::domain::repositories::{MappingFilter, UrlRepository};
use crate::error::AppError;

/// Lookup/insert attempts before giving up on a contended submission.
const MAX_ATTEMPTS: usize = 5;

/// Service for registering URLs and reading mappings back.
///
/// Submissions are idempotent: a URL already registered returns its existing
/// mapping. New URLs get the next identifier from the repository's atomic
/// allocator, never from a row count taken outside it.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Returns the mapping for `url`, creating it if needed.
    ///
    /// # Deduplication
    ///
    /// Looks up an existing mapping by exact string match first. If another
    /// request registers the same URL between the lookup and the insert, the
    /// insert reports a conflict and the lookup is repeated, so both callers
    /// receive the same mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors or if the conflict
    /// retries are exhausted.
    pub async fn submit(&self, url: &ValidatedUrl) -> Result<UrlMapping, AppError> {
        let original_url = url.as_str();

        for attempt in 1..=MAX_ATTEMPTS {
            if let Some(existing) = self.repository.find_by_url(original_url).await? {
                debug!(
                    "Dedup hit for {} -> {}",
                    existing.original_url, existing.short_id
                );
                return Ok(existing);
            }

            match self.repository.insert_next(original_url).await {
                Ok(Some(created)) => {
                    info!(
                        short_id = created.short_id,
                        "Registered {}", created.original_url
                    );
                    return Ok(created);
                }
                Ok(None) => {
                    debug!(
                        "Concurrent registration of {} (attempt {}), retrying lookup",
                        original_url, attempt
                    );
                }
                Err(e) if e.is_conflict() => {
                    warn!(
                        "Conflict inserting {} (attempt {}): {}",
                        original_url, attempt, e
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to allocate short url",
            json!({ "reason": "Too many conflicts" }),
        ))
    }

    /// Finds a mapping by its short identifier.
    ///
    /// Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, short_id: i64) -> Result<Option<UrlMapping>, AppError> {
        self.repository.find_by_short_id(short_id).await
    }

    /// Lists mappings matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list(&self, filter: &MappingFilter) -> Result<Vec<UrlMapping>, AppError> {
        self.repository.list(filter).await
    }

    /// Counts all registered mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn total(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use chrono::Utc;

    fn validated(url: &str) -> ValidatedUrl {
        ValidatedUrl::new(url.to_string(), "example.com".to_string())
    }

    fn mapping(short_id: i64, url: &str) -> UrlMapping {
        UrlMapping::new(short_id, url.to_string(), Utc::now())
    }

    /// Lookup stub that misses once, then finds the URL under `short_id`.
    fn registered_on_second_lookup(
        short_id: i64,
    ) -> impl FnMut(&str) -> Result<Option<UrlMapping>, AppError> + Send + 'static {
        let mut calls = 0;
        move |url: &str| {
            calls += 1;
            if calls == 1 {
                Ok(None)
            } else {
                Ok(Some(mapping(short_id, url)))
            }
        }
    }

    #[tokio::test]
    async fn test_submit_new_url() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_url()
            .withf(|url| url == "http://www.example.com")
            .times(1)
            .returning(|_| Ok(None));

        repo.expect_insert_next()
            .times(1)
            .returning(|url| Ok(Some(mapping(1, url))));

        let service = UrlService::new(Arc::new(repo));
        let result = service.submit(&validated("http://www.example.com")).await;

        let created = result.unwrap();
        assert_eq!(created.short_id, 1);
        assert_eq!(created.original_url, "http://www.example.com");
    }

    #[tokio::test]
    async fn test_submit_existing_url_is_idempotent() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_url()
            .times(1)
            .returning(|url| Ok(Some(mapping(7, url))));

        repo.expect_insert_next().times(0);

        let service = UrlService::new(Arc::new(repo));
        let result = service.submit(&validated("https://example.com")).await;

        assert_eq!(result.unwrap().short_id, 7);
    }

    #[tokio::test]
    async fn test_submit_concurrent_registration_falls_back_to_lookup() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_url()
            .times(2)
            .returning(registered_on_second_lookup(3));

        repo.expect_insert_next()
            .times(1)
            .returning(|_| Ok(None));

        let service = UrlService::new(Arc::new(repo));
        let result = service.submit(&validated("https://example.com")).await;

        assert_eq!(result.unwrap().short_id, 3);
    }

    #[tokio::test]
    async fn test_submit_unique_violation_is_retried_as_lookup() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_url()
            .times(2)
            .returning(registered_on_second_lookup(4));

        repo.expect_insert_next()
            .times(1)
            .returning(|_| Err(AppError::conflict("Unique constraint violation", json!({}))));

        let service = UrlService::new(Arc::new(repo));
        let result = service.submit(&validated("https://example.com")).await;

        assert_eq!(result.unwrap().short_id, 4);
    }

    #[tokio::test]
    async fn test_submit_gives_up_after_max_attempts() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_url()
            .times(MAX_ATTEMPTS)
            .returning(|_| Ok(None));

        repo.expect_insert_next()
            .times(MAX_ATTEMPTS)
            .returning(|_| Ok(None));

        let service = UrlService::new(Arc::new(repo));
        let result = service.submit(&validated("https://example.com")).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_submit_propagates_storage_errors() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_url()
            .times(1)
            .returning(|_| Ok(None));

        repo.expect_insert_next()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = UrlService::new(Arc::new(repo));
        let result = service.submit(&validated("https://example.com")).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_resolve_missing_is_none() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_short_id()
            .withf(|id| *id == 999)
            .times(1)
            .returning(|_| Ok(None));

        let service = UrlService::new(Arc::new(repo));

        assert!(service.resolve(999).await.unwrap().is_none());
    }
}
