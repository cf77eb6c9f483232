#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use shorturl::api::routes::shorturl_routes;
use shorturl::application::services::{UrlService, ValidationService};
use shorturl::domain::host_resolver::{HostResolver, ResolveError};
use shorturl::domain::repositories::UrlRepository;
use shorturl::infrastructure::cache::NullCache;
use shorturl::infrastructure::persistence::{MemoryUrlRepository, PgUrlRepository};
use shorturl::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

/// Hostnames under this suffix fail to resolve.
pub const UNRESOLVABLE_SUFFIX: &str = ".invalid";

/// Resolver that answers without touching the network.
pub struct StaticResolver;

#[async_trait]
impl HostResolver for StaticResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        if host.ends_with(UNRESOLVABLE_SUFFIX) {
            Err(ResolveError::NoAddresses(host.to_string()))
        } else {
            Ok(())
        }
    }
}

pub fn create_state_with(repository: Arc<dyn UrlRepository>) -> AppState {
    let validation_service = Arc::new(ValidationService::new(
        Arc::new(StaticResolver),
        Duration::from_millis(500),
    ));
    let url_service = Arc::new(UrlService::new(repository));

    AppState::new(validation_service, url_service, Arc::new(NullCache::new()))
}

pub fn create_test_state() -> AppState {
    create_state_with(Arc::new(MemoryUrlRepository::new()))
}

pub fn create_pg_test_state(pool: PgPool) -> AppState {
    create_state_with(Arc::new(PgUrlRepository::new(Arc::new(pool))))
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", shorturl_routes())
        .with_state(state)
}
