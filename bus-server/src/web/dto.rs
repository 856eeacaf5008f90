//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogSnapshot, StopCatalog};
use crate::domain::{BusLeg, BusPosition, RoutePlan, Segment, Stop, StopId, TouristSpot, Walk};

/// Endpoints of a route search.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteQuery {
    pub from_lat: f64,
    pub from_lng: f64,
    pub to_lat: f64,
    pub to_lng: f64,
}

/// Centre and optional radius for a nearby lookup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyQuery {
    pub latitude: f64,
    pub longitude: f64,

    /// Search radius in km; each endpoint has its own default
    pub radius_km: Option<f64>,
}

/// Bus number search.
#[derive(Debug, Deserialize)]
pub struct BusSearchQuery {
    pub number: String,
}

/// Reported position of a bus.
#[derive(Debug, Deserialize)]
pub struct LocationUpdateRequest {
    pub latitude: f64,
    pub longitude: f64,

    /// Speed in km/h; a report without one means the bus is stationary
    #[serde(default)]
    pub speed: f64,
}

/// A stop as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopResult {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub bus_routes: Vec<String>,
}

/// A route plan.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlanResult {
    pub id: String,
    pub segments: Vec<SegmentResult>,
    pub total_duration_minutes: i64,
    pub total_distance_km: f64,
    pub transfer_count: usize,
    pub estimated_fare: f64,
}

/// A segment of a plan.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SegmentResult {
    Walk(WalkResult),
    Bus(BusLegResult),
}

/// A walking segment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkResult {
    pub duration_minutes: i64,
    pub distance_km: f64,
}

/// A bus ride.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusLegResult {
    /// Route identifier, as shown on the bus
    pub bus_number: String,
    pub route_name: String,
    pub start_stop: Option<StopResult>,
    pub end_stop: Option<StopResult>,
    pub duration_minutes: i64,
    pub distance_km: f64,
}

/// A tracked bus.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusResult {
    pub id: String,
    pub number: String,
    pub route_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub speed: f64,
    pub occupancy: u32,
    pub last_updated: DateTime<Utc>,
}

/// A tourist spot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotResult {
    pub id: String,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: String,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
}

/// Catalog state after a reload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResult {
    pub generation: u64,
    pub stop_count: usize,
    pub route_count: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StopResult {
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            id: stop.id.to_string(),
            name: stop.name.clone(),
            latitude: stop.location.latitude(),
            longitude: stop.location.longitude(),
            bus_routes: stop.routes.iter().map(|r| r.to_string()).collect(),
        }
    }

    fn resolve(id: &StopId, catalog: &CatalogSnapshot) -> Option<Self> {
        catalog.stop(id).map(Self::from_stop)
    }
}

impl RoutePlanResult {
    /// Create from a plan, resolving stop details from the snapshot it was
    /// planned against.
    pub fn from_plan(plan: &RoutePlan, catalog: &CatalogSnapshot) -> Self {
        Self {
            id: plan.id().as_str().to_string(),
            segments: plan
                .segments()
                .iter()
                .map(|s| SegmentResult::from_segment(s, catalog))
                .collect(),
            total_duration_minutes: plan.total_duration_minutes(),
            total_distance_km: plan.total_distance_km(),
            transfer_count: plan.transfer_count(),
            estimated_fare: plan.estimated_fare(),
        }
    }
}

impl SegmentResult {
    pub fn from_segment(segment: &Segment, catalog: &CatalogSnapshot) -> Self {
        match segment {
            Segment::Walk(walk) => SegmentResult::Walk(WalkResult::from_walk(walk)),
            Segment::Bus(leg) => SegmentResult::Bus(BusLegResult::from_leg(leg, catalog)),
        }
    }
}

impl WalkResult {
    pub fn from_walk(walk: &Walk) -> Self {
        Self {
            duration_minutes: walk.duration.num_minutes(),
            distance_km: walk.distance_km,
        }
    }
}

impl BusLegResult {
    pub fn from_leg(leg: &BusLeg, catalog: &CatalogSnapshot) -> Self {
        Self {
            bus_number: leg.route.to_string(),
            route_name: leg.route_name.clone(),
            start_stop: StopResult::resolve(&leg.from, catalog),
            end_stop: StopResult::resolve(&leg.to, catalog),
            duration_minutes: leg.duration.num_minutes(),
            distance_km: leg.distance_km,
        }
    }
}

impl CatalogResult {
    pub fn from_snapshot(snapshot: &CatalogSnapshot) -> Self {
        Self {
            generation: snapshot.generation(),
            stop_count: snapshot.stops().len(),
            route_count: snapshot.routes().len(),
        }
    }
}

impl BusResult {
    pub fn from_bus(bus: &BusPosition) -> Self {
        Self {
            id: bus.id.to_string(),
            number: bus.number.clone(),
            route_name: bus.route_name.clone(),
            latitude: bus.location.latitude(),
            longitude: bus.location.longitude(),
            speed: bus.speed_kmh,
            occupancy: bus.occupancy,
            last_updated: bus.last_updated,
        }
    }
}

impl SpotResult {
    pub fn from_spot(spot: &TouristSpot) -> Self {
        Self {
            id: spot.id.to_string(),
            name: spot.name.clone(),
            description: spot.description.clone(),
            latitude: spot.location.latitude(),
            longitude: spot.location.longitude(),
            category: spot.category.clone(),
            rating: spot.rating,
            image_url: spot.image_url.clone(),
        }
    }
}
