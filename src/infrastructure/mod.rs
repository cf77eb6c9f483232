//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and no-op implementations)
//! - [`dns`] - System resolver for URL reachability checks
//! - [`persistence`] - PostgreSQL and in-memory repository implementations

pub mod cache;
pub mod dns;
pub mod persistence;
