//! Utility functions shared across layers.
//!
//! - [`url_pattern`] - Syntactic URL checks and hostname extraction
//! - [`db_error`] - Database error classification
//! - [`date_param`] - Lenient date parsing for query parameters

pub mod date_param;
pub mod db_error;
pub mod url_pattern;
