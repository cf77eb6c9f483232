//! Resolution of public short URL path parameters.

use std::sync::Arc;

use tracing::{debug, error};

use crate::application::services::UrlService;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Resolves the `short_url` path parameter to a redirect target.
///
/// Reads through the cache first. Since mappings never change, a cached entry
/// is always the current answer; misses fall back to the store and populate
/// the cache in a detached task.
pub struct RedirectService {
    url_service: Arc<UrlService>,
    cache: Arc<dyn CacheService>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(url_service: Arc<UrlService>, cache: Arc<dyn CacheService>) -> Self {
        Self { url_service, cache }
    }

    /// Returns the original URL for a raw path parameter.
    ///
    /// Non-numeric, zero, negative, and out-of-range input is treated exactly
    /// like an unassigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ShortUrlNotFound`] on a miss and
    /// [`AppError::Internal`] on storage errors.
    pub async fn resolve_for_redirect(&self, raw_short_id: &str) -> Result<String, AppError> {
        let Some(short_id) = parse_short_id(raw_short_id) else {
            debug!("Unparseable short url {:?}", raw_short_id);
            return Err(AppError::ShortUrlNotFound);
        };

        match self.cache.get_url(short_id).await {
            Ok(Some(url)) => return Ok(url),
            Ok(None) => {}
            Err(e) => error!("Cache error: {}", e),
        }

        let mapping = self
            .url_service
            .resolve(short_id)
            .await?
            .ok_or(AppError::ShortUrlNotFound)?;

        let cache = self.cache.clone();
        let url = mapping.original_url.clone();
        tokio::spawn(async move {
            if let Err(e) = cache.set_url(short_id, &url, None).await {
                error!("Failed to cache URL: {}", e);
            }
        });

        Ok(mapping.original_url)
    }
}

/// Parses a path parameter into a positive identifier.
fn parse_short_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}
