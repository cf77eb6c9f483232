//! Repository trait for URL mapping storage.

use crate::domain::entities::UrlMapping;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Filter criteria for listing mappings.
///
/// Bounds are inclusive and apply to `created_at`. Results are ordered by
/// `short_id` and capped at `limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingFilter {
    pub from_date: Option<DateTime<Utc>>,
    pub to_date: Option<DateTime<Utc>>,
    pub limit: i64,
}

impl MappingFilter {
    /// Creates a filter with only a result cap.
    pub fn new(limit: i64) -> Self {
        Self {
            from_date: None,
            to_date: None,
            limit,
        }
    }

    /// Adds date range filtering to the query.
    pub fn with_date_range(
        mut self,
        from_date: Option<DateTime<Utc>>,
        to_date: Option<DateTime<Utc>>,
    ) -> Self {
        self.from_date = from_date;
        self.to_date = to_date;
        self
    }

    /// Returns true if `mapping` falls inside the date bounds.
    pub fn matches(&self, mapping: &UrlMapping) -> bool {
        self.from_date.is_none_or(|from| mapping.created_at >= from)
            && self.to_date.is_none_or(|to| mapping.created_at <= to)
    }
}

/// Repository interface for URL mappings.
///
/// Implementations must make [`UrlRepository::insert_next`] linearizable:
/// concurrent calls never hand out the same `short_id`, never create two rows
/// for one URL, and never leave gaps in the sequence.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds a mapping by exact `original_url` match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Finds a mapping by its short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<UrlMapping>, AppError>;

    /// Atomically assigns the next identifier to `original_url` and stores the mapping.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(mapping))` if a new mapping was created
    /// - `Ok(None)` if the URL was registered concurrently; no identifier was consumed
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on a unique-constraint violation and
    /// [`AppError::Internal`] on other storage errors.
    async fn insert_next(&self, original_url: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Lists mappings matching `filter`, ordered by `short_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self, filter: &MappingFilter) -> Result<Vec<UrlMapping>, AppError>;

    /// Counts all stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;
}
