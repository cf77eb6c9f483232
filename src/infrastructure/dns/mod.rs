//! Network hostname resolution.

mod tokio_resolver;

pub use tokio_resolver::TokioHostResolver;
