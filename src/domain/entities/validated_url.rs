//! Proof that a URL passed validation.

/// A URL that passed syntactic and reachability validation.
///
/// Only [`crate::application::services::ValidationService`] produces values of
/// this type, so the store never sees an unchecked submission. The URL is kept
/// exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl {
    url: String,
    hostname: String,
}

impl ValidatedUrl {
    pub(crate) fn new(url: String, hostname: String) -> Self {
        Self { url, hostname }
    }

    /// The original, unmodified URL string.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Host extracted during validation.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }
}
