//! Bus stops and routes.

use serde::{Deserialize, Serialize};

use super::{Coordinate, RouteId, StopId};

/// A bus stop from the catalog.
///
/// `routes` keeps the order it was loaded in; route matching between stops
/// follows this order, and duplicates are kept as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Unique stop identifier
    pub id: StopId,
    /// Display name
    pub name: String,
    /// Where the stop is
    pub location: Coordinate,
    /// Routes calling at this stop
    #[serde(default)]
    pub routes: Vec<RouteId>,
}

impl Stop {
    /// Create a stop.
    pub fn new(id: StopId, name: impl Into<String>, location: Coordinate, routes: Vec<RouteId>) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            routes,
        }
    }

    /// Returns true if `route` calls at this stop.
    pub fn serves(&self, route: &RouteId) -> bool {
        self.routes.contains(route)
    }
}

/// A bus route from the route registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Route identifier (the number shown on the bus)
    pub id: RouteId,
    /// Human-readable route name
    pub name: String,
}
