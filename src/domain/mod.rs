//! Domain layer containing business entities and storage contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`host_resolver`] - Network hostname resolution contract
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Implementations are injected into the services in
//! [`crate::application::services`] as explicit handles.

pub mod entities;
pub mod host_resolver;
pub mod repositories;
