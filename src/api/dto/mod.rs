//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for serialization; query parameters are checked with
//! `validator`.

pub mod health;
pub mod mapping_list;
pub mod shorten;
