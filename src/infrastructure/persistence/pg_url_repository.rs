//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{MappingFilter, UrlRepository};
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_url;

/// Name of the counter row that allocates `url_mappings.short_id`.
const COUNTER_NAME: &str = "url_mappings";

/// PostgreSQL repository for URL mappings.
///
/// Identifiers come from a dedicated counter row rather than the row count.
/// Incrementing the counter takes a row lock that is held until the
/// allocating transaction ends, so allocations are serialized and a rolled
/// back insert also rolls back its increment.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Returns the current value of the identifier counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn counter_value(&self) -> Result<i64, AppError> {
        let value = sqlx::query_scalar::<_, i64>("SELECT value FROM url_counters WHERE name = $1")
            .bind(COUNTER_NAME)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(value.unwrap_or(0))
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT short_id, original_url, created_at
            FROM url_mappings
            WHERE original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT short_id, original_url, created_at
            FROM url_mappings
            WHERE short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn insert_next(&self, original_url: &str) -> Result<Option<UrlMapping>, AppError> {
        let mut tx = self.pool.begin().await?;

        let short_id = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE url_counters
            SET value = value + 1
            WHERE name = $1
            RETURNING value
            "#,
        )
        .bind(COUNTER_NAME)
        .fetch_one(&mut *tx)
        .await?;

        let inserted = sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO url_mappings (short_id, original_url)
            VALUES ($1, $2)
            ON CONFLICT (original_url) DO NOTHING
            RETURNING short_id, original_url, created_at
            "#,
        )
        .bind(short_id)
        .bind(original_url)
        .fetch_optional(&mut *tx)
        .await;

        match inserted {
            Ok(Some(mapping)) => {
                tx.commit().await?;
                Ok(Some(mapping))
            }
            Ok(None) => {
                debug!("{} registered concurrently, releasing id {}", original_url, short_id);
                tx.rollback().await?;
                Ok(None)
            }
            Err(e) if is_unique_violation_on_url(&e) => {
                tx.rollback().await?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self, filter: &MappingFilter) -> Result<Vec<UrlMapping>, AppError> {
        let rows = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT short_id, original_url, created_at
            FROM url_mappings
            WHERE ($1::timestamptz IS NULL OR created_at >= $1)
              AND ($2::timestamptz IS NULL OR created_at <= $2)
            ORDER BY short_id
            LIMIT $3
            "#,
        )
        .bind(filter.from_date)
        .bind(filter.to_date)
        .bind(filter.limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
