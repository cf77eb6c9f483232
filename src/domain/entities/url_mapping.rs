//! URL mapping entity: the single persisted record of the service.

use chrono::{DateTime, Utc};

/// A registered URL and the short identifier assigned to it.
///
/// Mappings are created once and never mutated. `short_id` values are dense:
/// the Nth distinct URL accepted receives `short_id = N`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlMapping {
    pub short_id: i64,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(short_id: i64, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_id,
            original_url,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_mapping_creation() {
        let now = Utc::now();
        let mapping = UrlMapping::new(1, "http://www.example.com".to_string(), now);

        assert_eq!(mapping.short_id, 1);
        assert_eq!(mapping.original_url, "http://www.example.com");
        assert_eq!(mapping.created_at, now);
    }
}
