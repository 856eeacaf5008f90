//! Bus route planner.
//!
//! Answers: "which buses get me from here to there?" Stops within walking
//! distance of each endpoint are matched on shared routes, either directly
//! or through one transfer stop, and each match becomes a walk/bus/walk
//! itinerary ranked by total travel time.

mod config;
mod graph;
mod itinerary;
mod locate;
mod rank;
mod search;


pub use config::PlannerConfig;
pub use graph::{TransferPoint, common_routes, transfer_points};
pub use itinerary::{ItineraryBuilder, PlanIds, PlanKind, SequentialPlanIds};
pub use locate::{Located, find_nearby};
pub use rank::rank_plans;
pub use search::{RoutePlanner, SearchError, SearchRequest};
