//! Data models
//!
//! Server-supplied records, decoded from the availability endpoint.

pub mod zone;

// Re-exports
pub use zone::*;
