//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// # Responses
///
/// - **307 Temporary Redirect** to the original URL on a hit
/// - **200** `{"error": "No short URL found for the given input"}` on a miss,
///   including non-numeric input
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let target = state
        .redirect_service
        .resolve_for_redirect(&short_url)
        .await?;

    Ok(Redirect::temporary(&target))
}
