//! Itinerary construction.
//!
//! Turns a resolved chain of stops and routes into a [`RoutePlan`] with
//! walking segments around each bus leg.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Duration;

use crate::catalog::RouteNames;
use crate::domain::{BusLeg, DomainError, PlanId, RouteId, RoutePlan, Segment, Stop, Walk};

use super::config::PlannerConfig;

/// What sort of plan an id is being generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanKind {
    Direct,
    Transfer,
}

impl PlanKind {
    fn prefix(self) -> &'static str {
        match self {
            PlanKind::Direct => "direct",
            PlanKind::Transfer => "transfer",
        }
    }
}

/// Source of plan identifiers.
///
/// Implementations must not hand out the same id twice.
pub trait PlanIds {
    fn next_id(&self, kind: PlanKind) -> PlanId;
}

/// Kind-prefixed counter: `direct-1`, `transfer-2`, ...
///
/// The counter is shared across kinds, so ids are unique for as long as the
/// generator lives. The planner creates one per search, which makes results
/// reproducible.
#[derive(Debug)]
pub struct SequentialPlanIds {
    next: AtomicU64,
}

impl SequentialPlanIds {
    /// Create a generator starting at 1.
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialPlanIds {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanIds for SequentialPlanIds {
    fn next_id(&self, kind: PlanKind) -> PlanId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        PlanId::new(format!("{}-{n}", kind.prefix()))
    }
}

/// Builds direct and one-transfer plans.
pub struct ItineraryBuilder<'a, N: RouteNames, I: PlanIds> {
    names: &'a N,
    ids: &'a I,
    config: &'a PlannerConfig,
}

impl<'a, N: RouteNames, I: PlanIds> ItineraryBuilder<'a, N, I> {
    /// Create a new builder.
    pub fn new(names: &'a N, ids: &'a I, config: &'a PlannerConfig) -> Self {
        Self { names, ids, config }
    }

    /// Estimated ride time for a bus covering `distance_km`.
    ///
    /// `max(min_bus, round(distance / speed * 60))` minutes.
    pub fn bus_duration(&self, distance_km: f64) -> Duration {
        // `as` saturates, and NaN becomes 0, so the floor still applies
        let mins = (distance_km / self.config.bus_speed_kmh * 60.0).round() as i64;
        Duration::minutes(mins).max(self.config.min_bus())
    }

    /// A bus leg on `route` from `from` to `to`.
    pub fn bus_leg(&self, from: &Stop, to: &Stop, route: &RouteId) -> BusLeg {
        let distance_km = from.location.distance_km(&to.location);
        BusLeg {
            route: route.clone(),
            route_name: self.names.name_for_route(route),
            from: from.id.clone(),
            to: to.id.clone(),
            duration: self.bus_duration(distance_km),
            distance_km,
        }
    }

    /// Walk, ride `route` from `origin` to `dest`, walk.
    pub fn direct(&self, origin: &Stop, dest: &Stop, route: &RouteId) -> Result<RoutePlan, DomainError> {
        let segments = vec![
            Segment::Walk(Walk::new(self.config.walk_to_stop(), self.config.walk_to_stop_km)),
            Segment::Bus(self.bus_leg(origin, dest, route)),
            Segment::Walk(Walk::new(self.config.walk_from_stop(), self.config.walk_from_stop_km)),
        ];

        RoutePlan::new(
            self.ids.next_id(PlanKind::Direct),
            segments,
            self.config.direct_fare,
        )
    }

    /// Walk, ride `first` to `transfer`, walk, ride `second` to `dest`, walk.
    pub fn transfer(
        &self,
        origin: &Stop,
        transfer: &Stop,
        dest: &Stop,
        first: &RouteId,
        second: &RouteId,
    ) -> Result<RoutePlan, DomainError> {
        let segments = vec![
            Segment::Walk(Walk::new(self.config.walk_to_stop(), self.config.walk_to_stop_km)),
            Segment::Bus(self.bus_leg(origin, transfer, first)),
            Segment::Walk(Walk::new(self.config.transfer_walk(), self.config.transfer_walk_km)),
            Segment::Bus(self.bus_leg(transfer, dest, second)),
            Segment::Walk(Walk::new(self.config.walk_from_stop(), self.config.walk_from_stop_km)),
        ];

        RoutePlan::new(
            self.ids.next_id(PlanKind::Transfer),
            segments,
            self.config.transfer_fare,
        )
    }
}
