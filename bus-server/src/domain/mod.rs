//! Domain types for the bus route planner.
//!
//! This module contains the validated value types shared by the planner,
//! the fleet registry and the web layer. Types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod bus;
mod coordinate;
mod error;
mod ids;
mod plan;
mod spot;
mod stop;

pub use bus::BusPosition;
pub use coordinate::{Coordinate, EARTH_RADIUS_KM, InvalidCoordinate, haversine_km};
pub use error::DomainError;
pub use ids::{BusId, InvalidId, RouteId, SpotId, StopId};
pub use plan::{BusLeg, PlanId, RoutePlan, Segment, Walk};
pub use spot::TouristSpot;
pub use stop::{Route, Stop};
