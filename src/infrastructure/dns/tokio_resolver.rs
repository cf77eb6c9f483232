//! Host resolution through the system resolver.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::host_resolver::{HostResolver, ResolveError};

/// Resolves hostnames with [`tokio::net::lookup_host`].
///
/// The lookup runs on Tokio's blocking pool, so a slow resolver never stalls
/// the request executor. No timeout is applied here.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioHostResolver;

impl TokioHostResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for TokioHostResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        let mut addrs = tokio::net::lookup_host((host, 0))
            .await
            .map_err(|e| ResolveError::LookupFailed {
                host: host.to_string(),
                reason: e.to_string(),
            })?;

        match addrs.next() {
            Some(addr) => {
                debug!("Resolved {} -> {}", host, addr.ip());
                Ok(())
            }
            None => Err(ResolveError::NoAddresses(host.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolves_ip_literal() {
        let resolver = TokioHostResolver::new();
        assert!(resolver.resolve("127.0.0.1").await.is_ok());
    }

    #[tokio::test]
    async fn test_reserved_tld_does_not_resolve() {
        let resolver = TokioHostResolver::new();
        assert!(resolver.resolve("no-such-host.invalid").await.is_err());
    }
}
