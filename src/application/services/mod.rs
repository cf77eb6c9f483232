//! Business logic services for the application layer.

pub mod redirect_service;
pub mod url_service;
pub mod validation_service;

pub use redirect_service::RedirectService;
pub use url_service::UrlService;
pub use validation_service::{ValidationError, ValidationService};
