//! Presentation sink
//!
//! The host-provided binding between computed view models and actual
//! presentation targets (DOM nodes on the booking site). A sink with no
//! target for a given zone skips it silently.

use crate::render::{CardView, OptionView};
use async_trait::async_trait;

/// Applies rendered availability to the host's presentation targets
///
/// Sinks never fail a refresh cycle: a zone id with no matching card or
/// option is skipped, not an error.
#[async_trait]
pub trait AvailabilitySink: Send + Sync {
    /// Apply the card state for `zone_id`, if a matching card exists.
    async fn apply_card(&self, zone_id: i64, view: &CardView);

    /// Apply the option state for `zone_id`, if a matching option exists.
    async fn apply_option(&self, zone_id: i64, view: &OptionView);
}
