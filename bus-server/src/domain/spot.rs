//! Points of interest shown alongside the route planner.

use serde::{Deserialize, Serialize};

use super::{Coordinate, SpotId};

/// A tourist spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouristSpot {
    pub id: SpotId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub location: Coordinate,
    #[serde(default)]
    pub category: String,
    /// Visitor rating, typically 0-5
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
}
