//! View-model rendering
//!
//! Pure computation from an availability record to the presentational state
//! the host applies to its card and select-option targets. Class names and
//! labels match the booking site's Bootstrap styling.

use shared::{Tier, ZoneAvailability};

/// Presentational state for a zone status card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Seat-count text
    pub seats_text: String,
    /// Emphasis classes for the seat count
    pub seats_class: &'static str,
    /// Human status label (localized)
    pub status_text: &'static str,
    /// Badge classes for the status label
    pub status_class: &'static str,
    /// Progress-bar fill width, `0.0..=100.0`
    pub progress_percent: f64,
    /// Color class for the progress bar
    pub progress_class: &'static str,
}

/// Presentational state for a zone's select-list option
#[derive(Debug, Clone, PartialEq)]
pub struct OptionView {
    /// Visible label: `"{title}{tier suffix}"`
    pub label: String,
    /// `data-available` attribute value
    pub available: u32,
    /// `data-capacity` attribute value
    pub capacity: u32,
}

impl CardView {
    /// Compute the card state for one record.
    pub fn from_zone(zone: &ZoneAvailability) -> Self {
        let tier = zone.tier();
        Self {
            seats_text: zone.available_seats.to_string(),
            seats_class: seats_class(tier),
            status_text: status_text(tier),
            status_class: status_class(tier),
            progress_percent: zone.fill_percent(),
            progress_class: progress_class(tier),
        }
    }
}

impl OptionView {
    /// Compute the option state for one record.
    pub fn from_zone(zone: &ZoneAvailability) -> Self {
        Self {
            label: format!("{}{}", zone.title, option_suffix(zone)),
            available: zone.available_seats,
            capacity: zone.capacity,
        }
    }
}

fn seats_class(tier: Tier) -> &'static str {
    match tier {
        Tier::Full => "text-danger fw-bold",
        Tier::Partial => "text-warning",
        Tier::Free => "text-success",
    }
}

fn status_class(tier: Tier) -> &'static str {
    match tier {
        Tier::Full => "bg-danger",
        Tier::Partial => "bg-warning text-dark",
        Tier::Free => "bg-success",
    }
}

fn progress_class(tier: Tier) -> &'static str {
    match tier {
        Tier::Full => "bg-danger",
        Tier::Partial => "bg-warning",
        Tier::Free => "bg-success",
    }
}

fn status_text(tier: Tier) -> &'static str {
    match tier {
        Tier::Full => "Занято",
        Tier::Partial => "Частично свободно",
        Tier::Free => "Свободно",
    }
}

fn option_suffix(zone: &ZoneAvailability) -> String {
    match zone.tier() {
        Tier::Full => " (Занято)".to_string(),
        Tier::Partial => format!(
            " ({} из {} свободно)",
            zone.available_seats, zone.capacity
        ),
        Tier::Free => " (Свободно)".to_string(),
    }
}
