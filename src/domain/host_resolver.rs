//! Hostname resolution contract used by URL validation.

use async_trait::async_trait;

/// Errors returned by a [`HostResolver`].
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("lookup failed for {host}: {reason}")]
    LookupFailed { host: String, reason: String },

    #[error("no addresses found for {0}")]
    NoAddresses(String),
}

/// Resolves a hostname on the network.
///
/// Implementations perform a single lookup and do not retry. Timeouts are
/// applied by the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Succeeds if `host` resolves to at least one address.
    async fn resolve(&self, host: &str) -> Result<(), ResolveError>;
}
