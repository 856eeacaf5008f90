//! Live bus positions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BusId, Coordinate};

/// The last known state of a tracked bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusPosition {
    /// Unique bus identifier
    pub id: BusId,
    /// Fleet number painted on the bus
    pub number: String,
    /// Route the bus is working
    pub route_name: String,
    /// Last reported position
    pub location: Coordinate,
    /// Last reported speed in km/h
    pub speed_kmh: f64,
    /// Passengers on board
    pub occupancy: u32,
    /// When the position was last reported
    pub last_updated: DateTime<Utc>,
}

impl BusPosition {
    /// Record a new position and speed reported at `at`.
    pub fn relocate(&mut self, location: Coordinate, speed_kmh: f64, at: DateTime<Utc>) {
        self.location = location;
        self.speed_kmh = speed_kmh;
        self.last_updated = at;
    }

    /// Case-insensitive substring match on the fleet number.
    pub fn number_matches(&self, query: &str) -> bool {
        self.number
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}
