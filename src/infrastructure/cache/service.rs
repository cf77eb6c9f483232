//! Cache service trait and error types.

use async_trait::async_trait;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching resolved short URLs.
///
/// Mappings never change once created, so a cached entry can only become
/// stale by expiring. Implementations must be fail-open: backend errors are
/// logged and reported as misses so that resolution falls back to the store.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the original URL for a short identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss or backend error
    async fn get_url(&self, short_id: i64) -> CacheResult<Option<String>>;

    /// Stores a resolved mapping with optional TTL in seconds.
    ///
    /// Implementations log backend errors and return `Ok(())`.
    async fn set_url(
        &self,
        short_id: i64,
        original_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;
}
