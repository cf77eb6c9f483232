//! Handler for short URL creation.

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
};
use tracing::debug;

use crate::api::dto::shorten::{ShortenForm, ShortenResponse};
use crate::application::services::ValidationError;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a URL and returns its short identifier.
///
/// # Endpoint
///
/// `POST /api/shorturl` (form field `url`)
///
/// # Flow
///
/// 1. Validate syntax and resolve the host (bounded DNS lookup)
/// 2. Return the existing mapping, or allocate the next identifier
///
/// # Response
///
/// ```json
/// { "original_url": "http://www.example.com", "short_url": 1 }
/// ```
///
/// Rejected submissions, including a missing field or an unreadable body,
/// get `200 {"error": "invalid url"}`.
pub async fn shorten_handler(
    State(state): State<AppState>,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let candidate = match form {
        Ok(Form(ShortenForm { url: Some(url) })) => url,
        Ok(_) => return Err(ValidationError::MalformedUrl.into()),
        Err(rejection) => {
            debug!("Unreadable shorten request: {}", rejection);
            return Err(ValidationError::MalformedUrl.into());
        }
    };

    let validated = state.validation_service.validate(&candidate).await?;
    let mapping = state.url_service.submit(&validated).await?;

    Ok(Json(mapping.into()))
}
