//! URL validation: syntax check, hostname extraction, and DNS reachability.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::domain::entities::ValidatedUrl;
use crate::domain::host_resolver::HostResolver;
use crate::utils::url_pattern::{extract_hostname, is_http_url};

/// Reasons a submission is rejected.
///
/// Both variants are reported to callers as the same `invalid url` payload;
/// the distinction is only logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("malformed url")]
    MalformedUrl,

    #[error("host {0} did not resolve")]
    UnresolvableHost(String),
}

/// Validates candidate URLs before they reach the store.
///
/// Performs one DNS lookup per submission, bounded by `dns_timeout`. A failed
/// or timed-out lookup rejects the submission; lookups are never retried.
pub struct ValidationService {
    resolver: Arc<dyn HostResolver>,
    dns_timeout: Duration,
}

impl ValidationService {
    /// Creates a new validation service.
    pub fn new(resolver: Arc<dyn HostResolver>, dns_timeout: Duration) -> Self {
        Self {
            resolver,
            dns_timeout,
        }
    }

    /// Fully validates `candidate`, including the DNS lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedUrl`] if the string is not an HTTP(S)
    /// URL or has no host. Returns [`ValidationError::UnresolvableHost`] if the
    /// host lookup fails or exceeds the timeout.
    pub async fn validate(&self, candidate: &str) -> Result<ValidatedUrl, ValidationError> {
        let validated = self.validate_syntax(candidate)?;
        let host = validated.hostname().to_string();

        match tokio::time::timeout(self.dns_timeout, self.resolver.resolve(&host)).await {
            Ok(Ok(())) => Ok(validated),
            Ok(Err(e)) => {
                debug!("Rejecting {}: {}", candidate, e);
                Err(ValidationError::UnresolvableHost(host))
            }
            Err(_) => {
                debug!(
                    "Rejecting {}: lookup of {} timed out after {:?}",
                    candidate, host, self.dns_timeout
                );
                Err(ValidationError::UnresolvableHost(host))
            }
        }
    }

    /// Runs only the syntactic checks, without touching the network.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedUrl`] on failure.
    pub fn validate_syntax(&self, candidate: &str) -> Result<ValidatedUrl, ValidationError> {
        if !is_http_url(candidate) {
            debug!("Rejecting {:?}: does not match URL pattern", candidate);
            return Err(ValidationError::MalformedUrl);
        }

        let host = extract_hostname(candidate).ok_or_else(|| {
            debug!("Rejecting {:?}: no hostname", candidate);
            ValidationError::MalformedUrl
        })?;

        Ok(ValidatedUrl::new(candidate.to_string(), host.to_string()))
    }
}
