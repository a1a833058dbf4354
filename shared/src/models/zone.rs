//! Zone availability model

use serde::{Deserialize, Serialize};

/// Availability tier for a zone. Drives all presentational styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// No free seats
    Full,
    /// Some seats occupied
    Partial,
    /// No seats occupied
    Free,
}

/// One zone's availability as reported by the server.
///
/// A snapshot is a `Vec<ZoneAvailability>` with ids unique within it. Records
/// are read-only input, valid only until the next poll replaces them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneAvailability {
    pub id: i64,
    pub title: String,
    /// Free seats right now, `0..=capacity`
    pub available_seats: u32,
    /// Total seats, positive and stable per zone
    pub capacity: u32,
}

impl ZoneAvailability {
    /// Classify into an availability tier.
    ///
    /// Total and mutually exclusive over valid records: exactly one tier
    /// holds for any `0 <= available_seats <= capacity` with `capacity > 0`.
    pub fn tier(&self) -> Tier {
        if self.available_seats == 0 {
            Tier::Full
        } else if self.available_seats < self.capacity {
            Tier::Partial
        } else {
            Tier::Free
        }
    }

    /// Free-seat ratio as a percentage, used for the progress-bar width.
    pub fn fill_percent(&self) -> f64 {
        f64::from(self.available_seats) / f64::from(self.capacity) * 100.0
    }
}
