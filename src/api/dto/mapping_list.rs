//! DTOs for listing registered mappings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::MappingFilter;
use crate::error::AppError;
use crate::utils::date_param::{Bound, parse_date_param};

/// Result cap applied when `limit` is absent.
pub const DEFAULT_LIMIT: u32 = 100;

/// Query parameters of `GET /api/shorturl`.
///
/// `from` and `to` accept a calendar date or an RFC 3339 timestamp.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct MappingListParams {
    #[serde(default)]
    pub from: Option<String>,

    #[serde(default)]
    pub to: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 1000))]
    pub limit: Option<u32>,
}

impl MappingListParams {
    /// Validates the parameters and converts them into a repository filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if `limit` is out of range, a date
    /// cannot be parsed, or `from` is after `to`.
    pub fn into_filter(self) -> Result<MappingFilter, AppError> {
        self.validate()?;

        let from = parse_bound(self.from.as_deref(), "from", Bound::Start)?;
        let to = parse_bound(self.to.as_deref(), "to", Bound::End)?;

        if let (Some(from), Some(to)) = (from, to)
            && from > to
        {
            return Err(AppError::bad_request(
                "'from' must not be after 'to'",
                json!({ "from": from, "to": to }),
            ));
        }

        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);

        Ok(MappingFilter::new(i64::from(limit)).with_date_range(from, to))
    }
}

fn parse_bound(
    value: Option<&str>,
    field: &str,
    bound: Bound,
) -> Result<Option<DateTime<Utc>>, AppError> {
    match value {
        None => Ok(None),
        Some(raw) => parse_date_param(raw, bound).map(Some).ok_or_else(|| {
            AppError::bad_request(
                "Invalid date, expected YYYY-MM-DD or RFC 3339",
                json!({ "field": field, "value": raw }),
            )
        }),
    }
}

/// Single entry in a mapping list.
#[derive(Debug, Serialize)]
pub struct MappingItem {
    pub original_url: String,
    pub short_url: i64,
    pub created_at: DateTime<Utc>,
}

impl From<UrlMapping> for MappingItem {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            original_url: mapping.original_url,
            short_url: mapping.short_id,
            created_at: mapping.created_at,
        }
    }
}

/// Response of `GET /api/shorturl`.
#[derive(Debug, Serialize)]
pub struct MappingListResponse {
    pub count: usize,
    pub mappings: Vec<MappingItem>,
}
