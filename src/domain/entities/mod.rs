//! Core domain entities.
//!
//! - [`UrlMapping`] - A registered URL with its short identifier
//! - [`ValidatedUrl`] - A submission that passed validation and may be stored

pub mod url_mapping;
pub mod validated_url;

pub use url_mapping::UrlMapping;
pub use validated_url::ValidatedUrl;
