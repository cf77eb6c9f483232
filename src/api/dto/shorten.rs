//! DTOs for the short URL endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlMapping;

/// Form body of `POST /api/shorturl`.
///
/// A missing `url` field is not a deserialization error: it is reported
/// in-band as an invalid URL, like any other rejected submission.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: Option<String>,
}

/// Successful response of `POST /api/shorturl`.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<UrlMapping> for ShortenResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            original_url: mapping.original_url,
            short_url: mapping.short_id,
        }
    }
}
