//! Shared types for seatwatch
//!
//! Data model for zone seat availability, shared between the HTTP layer
//! and the presentation layer.

pub mod models;

// Re-exports
pub use models::{Tier, ZoneAvailability};
