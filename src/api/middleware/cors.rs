//! Cross-origin resource sharing policy.

use tower_http::cors::{Any, CorsLayer};

/// Allows any origin to call the API.
///
/// The short URL endpoints are public and unauthenticated, so there is
/// nothing to protect with an origin allow-list.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
