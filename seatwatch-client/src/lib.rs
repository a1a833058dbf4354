//! Seatwatch Client - zone availability polling and rendering
//!
//! Polls the booking server for zone seat availability on a fixed cadence,
//! computes the presentational state for each zone, and hands it to a
//! host-provided sink.

pub mod config;
pub mod error;
pub mod http;
pub mod presenter;
pub mod render;
pub mod sink;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{AvailabilitySource, HttpClient};
pub use presenter::{AvailabilityPresenter, PresenterHandle};
pub use render::{CardView, OptionView};
pub use sink::AvailabilitySink;

// Re-export shared types for convenience
pub use shared::{Tier, ZoneAvailability};
