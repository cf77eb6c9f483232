//! Application layer services implementing business logic.
//!
//! Services consume domain traits through explicit handles and provide a
//! clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::validation_service::ValidationService`] - Syntax and DNS validation of submissions
//! - [`services::url_service::UrlService`] - Identifier allocation, dedup, and lookups
//! - [`services::redirect_service::RedirectService`] - Cached resolution of short URLs

pub mod services;
