//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{RedirectService, UrlService, ValidationService};
use crate::infrastructure::cache::CacheService;

/// Handles to the services, cloned per request.
///
/// Every collaborator is passed in explicitly; nothing is reached through
/// process-wide globals, so tests can assemble a state from test doubles.
#[derive(Clone)]
pub struct AppState {
    pub validation_service: Arc<ValidationService>,
    pub url_service: Arc<UrlService>,
    pub redirect_service: Arc<RedirectService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Wires the services together.
    ///
    /// `RedirectService` shares `url_service` and `cache`.
    pub fn new(
        validation_service: Arc<ValidationService>,
        url_service: Arc<UrlService>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        let redirect_service = Arc::new(RedirectService::new(url_service.clone(), cache.clone()));

        Self {
            validation_service,
            url_service,
            redirect_service,
            cache,
        }
    }
}
