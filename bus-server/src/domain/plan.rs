//! Route plan types.
//!
//! A `RoutePlan` is a rider itinerary from an origin coordinate to a
//! destination coordinate: walks to and from stops plus one or more bus legs.

use std::fmt;

use chrono::Duration;

use super::{DomainError, RouteId, StopId};

/// Identifier of a generated plan, unique within one search result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlanId(String);

impl PlanId {
    /// Wrap a generated identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A walk to, from, or between stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    /// Walking time
    pub duration: Duration,
    /// Walking distance in kilometres
    pub distance_km: f64,
}

impl Walk {
    /// Creates a walk of the given length.
    pub fn new(duration: Duration, distance_km: f64) -> Self {
        Self {
            duration,
            distance_km,
        }
    }
}

/// A ride on one bus route between two stops.
///
/// Stops are referenced by id; the catalog snapshot the plan was built from
/// resolves them for display.
#[derive(Debug, Clone, PartialEq)]
pub struct BusLeg {
    /// Route ridden
    pub route: RouteId,
    /// Route label at the time the plan was built
    pub route_name: String,
    /// Boarding stop
    pub from: StopId,
    /// Alighting stop
    pub to: StopId,
    /// Ride time
    pub duration: Duration,
    /// Straight-line distance between the stops in kilometres
    pub distance_km: f64,
}

/// One step of a plan: a walk or a bus leg.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// On foot
    Walk(Walk),
    /// On a bus
    Bus(BusLeg),
}

impl Segment {
    /// Returns the duration of this segment.
    pub fn duration(&self) -> Duration {
        match self {
            Segment::Walk(walk) => walk.duration,
            Segment::Bus(leg) => leg.duration,
        }
    }

    /// Returns the distance covered by this segment in kilometres.
    pub fn distance_km(&self) -> f64 {
        match self {
            Segment::Walk(walk) => walk.distance_km,
            Segment::Bus(leg) => leg.distance_km,
        }
    }

    /// Returns true if this is a bus segment.
    pub fn is_bus(&self) -> bool {
        matches!(self, Segment::Bus(_))
    }

    /// Returns the leg if this is a bus segment.
    pub fn as_bus(&self) -> Option<&BusLeg> {
        match self {
            Segment::Bus(leg) => Some(leg),
            Segment::Walk(_) => None,
        }
    }
}

/// A complete itinerary.
///
/// # Invariants
///
/// - At least one segment
/// - Consecutive bus legs connect (alighting stop of one = boarding stop of
///   the next)
///
/// Totals and the transfer count are derived from the segments on every
/// call, so they can never drift from the segment list.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    id: PlanId,
    segments: Vec<Segment>,
    estimated_fare: f64,
}

impl RoutePlan {
    /// Constructs a plan from ordered segments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the segment list is empty or if two consecutive bus
    /// legs do not share a stop.
    pub fn new(id: PlanId, segments: Vec<Segment>, estimated_fare: f64) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        let legs: Vec<&BusLeg> = segments.iter().filter_map(Segment::as_bus).collect();
        for pair in legs.windows(2) {
            if pair[0].to != pair[1].from {
                return Err(DomainError::StopsNotConnected(
                    pair[0].to.clone(),
                    pair[1].from.clone(),
                ));
            }
        }

        Ok(Self {
            id,
            segments,
            estimated_fare,
        })
    }

    /// Returns the plan identifier.
    pub fn id(&self) -> &PlanId {
        &self.id
    }

    /// Returns the segments in travel order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the bus legs in travel order.
    pub fn bus_legs(&self) -> impl Iterator<Item = &BusLeg> {
        self.segments.iter().filter_map(Segment::as_bus)
    }

    /// Total travel time across all segments.
    pub fn total_duration(&self) -> Duration {
        self.segments
            .iter()
            .fold(Duration::zero(), |acc, s| acc + s.duration())
    }

    /// Total travel time in whole minutes.
    pub fn total_duration_minutes(&self) -> i64 {
        self.total_duration().num_minutes()
    }

    /// Total distance across all segments in kilometres.
    pub fn total_distance_km(&self) -> f64 {
        self.segments.iter().map(Segment::distance_km).sum()
    }

    /// Number of changes between buses.
    pub fn transfer_count(&self) -> usize {
        self.bus_legs().count().saturating_sub(1)
    }

    /// Estimated fare for the whole plan.
    pub fn estimated_fare(&self) -> f64 {
        self.estimated_fare
    }
}
