//! Direct and one-transfer route search.
//!
//! Resolves stops near both endpoints, finds routes connecting them, and
//! builds, ranks and truncates the resulting plans.

use std::time::Instant;

use tracing::{debug, trace};

use crate::catalog::{RouteNames, StopCatalog};
use crate::domain::{Coordinate, DomainError, InvalidCoordinate, RoutePlan, Stop};

use super::config::PlannerConfig;
use super::graph::{common_routes, transfer_points};
use super::itinerary::{ItineraryBuilder, PlanIds, SequentialPlanIds};
use super::locate::find_nearby;
use super::rank::rank_plans;

/// Error from route search.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),

    /// A plan could not be assembled
    #[error("failed to build route plan: {0}")]
    Domain(#[from] DomainError),

    /// Search timed out
    #[error("search timed out")]
    Timeout,
}

impl From<InvalidCoordinate> for SearchError {
    fn from(e: InvalidCoordinate) -> Self {
        SearchError::InvalidRequest(e.to_string())
    }
}

/// Request for route search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRequest {
    /// Where the rider starts.
    pub origin: Coordinate,

    /// Where the rider wants to go.
    pub destination: Coordinate,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Create a request from raw degrees, validating both endpoints.
    pub fn from_degrees(
        from_lat: f64,
        from_lng: f64,
        to_lat: f64,
        to_lng: f64,
    ) -> Result<Self, SearchError> {
        Ok(Self::new(
            Coordinate::new(from_lat, from_lng)?,
            Coordinate::new(to_lat, to_lng)?,
        ))
    }
}

/// Route planner over one catalog snapshot.
///
/// Holds only shared references, so any number of planners can search the
/// same snapshot concurrently.
pub struct RoutePlanner<'a, C: StopCatalog, N: RouteNames> {
    catalog: &'a C,
    names: &'a N,
    config: &'a PlannerConfig,
}

impl<'a, C: StopCatalog, N: RouteNames> RoutePlanner<'a, C, N> {
    /// Create a new planner.
    pub fn new(catalog: &'a C, names: &'a N, config: &'a PlannerConfig) -> Self {
        Self {
            catalog,
            names,
            config,
        }
    }

    /// Stops within `radius_km` of `center`, in catalog order.
    pub fn nearby_stops(&self, center: &Coordinate, radius_km: f64) -> Vec<&'a Stop> {
        let catalog: &'a C = self.catalog;
        find_nearby(center, radius_km, catalog.stops())
    }

    /// Best direct plans, shortest first.
    pub fn find_direct_routes(&self, request: &SearchRequest) -> Result<Vec<RoutePlan>, SearchError> {
        self.find_direct_routes_with(request, &SequentialPlanIds::new())
    }

    /// Best direct plans, drawing plan ids from `ids`.
    ///
    /// Every route shared by an (origin stop, destination stop) pair yields
    /// its own plan.
    pub fn find_direct_routes_with<I: PlanIds>(
        &self,
        request: &SearchRequest,
        ids: &I,
    ) -> Result<Vec<RoutePlan>, SearchError> {
        let origin_stops = self.nearby_stops(&request.origin, self.config.stop_radius_km);
        let dest_stops = self.nearby_stops(&request.destination, self.config.stop_radius_km);

        let builder = ItineraryBuilder::new(self.names, ids, self.config);
        let mut plans = Vec::new();

        for origin in &origin_stops {
            for dest in &dest_stops {
                for route in common_routes(origin, dest) {
                    plans.push(builder.direct(origin, dest, route)?);
                }
            }
        }

        debug!(
            origin_stops = origin_stops.len(),
            dest_stops = dest_stops.len(),
            candidates = plans.len(),
            "direct search complete"
        );

        Ok(rank_plans(plans, self.config.max_direct_results))
    }

    /// Best one-transfer plans, shortest first.
    pub fn find_transfer_routes(&self, request: &SearchRequest) -> Result<Vec<RoutePlan>, SearchError> {
        self.find_transfer_routes_with(request, &SequentialPlanIds::new())
    }

    /// Best one-transfer plans, drawing plan ids from `ids`.
    ///
    /// Every stop in the catalog is tried as the transfer point for every
    /// (origin stop, destination stop) pair. Only the first shared route on
    /// each leg is used unless `enumerate_transfer_routes` is set.
    ///
    /// The scan gives up with [`SearchError::Timeout`] once
    /// `search_timeout` has elapsed, checked before each stop pair.
    pub fn find_transfer_routes_with<I: PlanIds>(
        &self,
        request: &SearchRequest,
        ids: &I,
    ) -> Result<Vec<RoutePlan>, SearchError> {
        let origin_stops = self.nearby_stops(&request.origin, self.config.stop_radius_km);
        let dest_stops = self.nearby_stops(&request.destination, self.config.stop_radius_km);

        let deadline = Instant::now() + self.config.search_timeout();
        let builder = ItineraryBuilder::new(self.names, ids, self.config);
        let mut plans = Vec::new();

        for origin in &origin_stops {
            for dest in &dest_stops {
                if Instant::now() >= deadline {
                    debug!(candidates = plans.len(), "transfer search deadline passed");
                    return Err(SearchError::Timeout);
                }

                for point in transfer_points(origin, dest, self.catalog.stops()) {
                    trace!(
                        origin = %origin.id,
                        transfer = %point.stop.id,
                        dest = %dest.id,
                        "transfer point"
                    );

                    let pairs = if self.config.enumerate_transfer_routes {
                        point.all_pairs()
                    } else {
                        point.first_match().into_iter().collect()
                    };

                    for (first, second) in pairs {
                        plans.push(builder.transfer(origin, point.stop, dest, first, second)?);
                    }
                }
            }
        }

        debug!(
            origin_stops = origin_stops.len(),
            dest_stops = dest_stops.len(),
            candidates = plans.len(),
            "transfer search complete"
        );

        Ok(rank_plans(plans, self.config.max_transfer_results))
    }
}
