//! Handler for listing registered mappings.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::json;
use tracing::debug;

use crate::api::dto::mapping_list::{MappingItem, MappingListParams, MappingListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists mappings in identifier order.
///
/// # Endpoint
///
/// `GET /api/shorturl?from=2024-01-01&to=2024-01-31&limit=10`
///
/// # Query Parameters
///
/// - `from`, `to` - Optional inclusive bounds on creation time
/// - `limit` - Result cap, 1-1000 (default 100)
///
/// # Response
///
/// ```json
/// {
///   "count": 1,
///   "mappings": [
///     { "original_url": "http://www.example.com", "short_url": 1, "created_at": "..." }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with a structured body if a parameter is invalid,
/// including values that do not parse at all (`limit=abc`).
pub async fn list_handler(
    State(state): State<AppState>,
    query: Result<Query<MappingListParams>, QueryRejection>,
) -> Result<Json<MappingListResponse>, AppError> {
    let Query(params) = query.map_err(|rejection| {
        debug!("Unreadable list query: {}", rejection);
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let filter = params.into_filter()?;

    let mappings: Vec<MappingItem> = state
        .url_service
        .list(&filter)
        .await?
        .into_iter()
        .map(MappingItem::from)
        .collect();

    Ok(Json(MappingListResponse {
        count: mappings.len(),
        mappings,
    }))
}
