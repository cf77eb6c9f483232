//! In-process implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{MappingFilter, UrlRepository};
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    /// Mappings in allocation order; `rows[i].short_id == i + 1`.
    rows: Vec<UrlMapping>,
    by_url: HashMap<String, i64>,
}

/// Single-process URL store for development and tests.
///
/// Both indexes live under one lock. The next identifier is derived inside
/// the write critical section, so the dedup check and the allocation are one
/// atomic step. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryUrlRepository {
    inner: RwLock<Inner>,
}

impl MemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlMapping>, AppError> {
        let inner = self.inner.read().await;

        Ok(inner
            .by_url
            .get(original_url)
            .and_then(|id| inner.rows.get((*id - 1) as usize))
            .cloned())
    }

    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<UrlMapping>, AppError> {
        if short_id < 1 {
            return Ok(None);
        }

        let inner = self.inner.read().await;
        Ok(inner.rows.get((short_id - 1) as usize).cloned())
    }

    async fn insert_next(&self, original_url: &str) -> Result<Option<UrlMapping>, AppError> {
        let mut inner = self.inner.write().await;

        if inner.by_url.contains_key(original_url) {
            return Ok(None);
        }

        let short_id = inner.rows.len() as i64 + 1;
        let mapping = UrlMapping::new(short_id, original_url.to_string(), Utc::now());

        inner.by_url.insert(original_url.to_string(), short_id);
        inner.rows.push(mapping.clone());

        Ok(Some(mapping))
    }

    async fn list(&self, filter: &MappingFilter) -> Result<Vec<UrlMapping>, AppError> {
        let inner = self.inner.read().await;
        let limit = usize::try_from(filter.limit).unwrap_or(0);

        Ok(inner
            .rows
            .iter()
            .filter(|mapping| filter.matches(mapping))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.inner.read().await.rows.len() as i64)
    }
}
