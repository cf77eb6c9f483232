//! API route configuration.

use crate::api::handlers::{list_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Short URL routes.
///
/// # Endpoints
///
/// - `POST /shorturl`              - Register a URL
/// - `GET  /shorturl`              - List mappings (date bounds + result cap)
/// - `GET  /shorturl/{short_url}`  - Redirect to the original URL
pub fn shorturl_routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", get(list_handler).post(shorten_handler))
        .route("/shorturl/{short_url}", get(redirect_handler))
}
