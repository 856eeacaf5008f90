//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::catalog::{CatalogError, CatalogSnapshot};
use crate::domain::{BusId, Coordinate, InvalidCoordinate, InvalidId, RoutePlan};
use crate::fleet::FleetError;
use crate::planner::{PlanKind, PlannerConfig, RoutePlanner, SearchError, SearchRequest};
use crate::spots::DEFAULT_SPOT_RADIUS_KM;

use super::dto::*;
use super::state::AppState;

/// Default radius for the nearby stops endpoint (km).
const DEFAULT_STOP_RADIUS_KM: f64 = 0.5;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/routes/direct", get(direct_routes))
        .route("/api/routes/transfer", get(transfer_routes))
        .route("/api/routes/stops/nearby", get(nearby_stops))
        .route("/api/buses", get(list_buses))
        .route("/api/buses/search", get(search_buses))
        .route("/api/buses/:id", get(get_bus))
        .route("/api/buses/:id/location", post(update_bus_location))
        .route("/api/tourist-spots", get(list_spots))
        .route("/api/tourist-spots/nearby", get(nearby_spots))
        .route("/api/catalog/reload", post(reload_catalog))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Direct plans between two points, shortest first.
async fn direct_routes(
    State(state): State<AppState>,
    query: Result<Query<RouteQuery>, QueryRejection>,
) -> Result<Json<Vec<RoutePlanResult>>, AppError> {
    let Query(query) = query?;
    search_plans(&state, PlanKind::Direct, &query).await
}

/// One-transfer plans between two points, shortest first.
async fn transfer_routes(
    State(state): State<AppState>,
    query: Result<Query<RouteQuery>, QueryRejection>,
) -> Result<Json<Vec<RoutePlanResult>>, AppError> {
    let Query(query) = query?;
    search_plans(&state, PlanKind::Transfer, &query).await
}

async fn search_plans(
    state: &AppState,
    kind: PlanKind,
    query: &RouteQuery,
) -> Result<Json<Vec<RoutePlanResult>>, AppError> {
    let request = SearchRequest::from_degrees(query.from_lat, query.from_lng, query.to_lat, query.to_lng)?;
    let snapshot = state.catalog.snapshot().await;
    let generation = snapshot.generation();

    let plans = match state.plans.get(kind, &request, generation).await {
        Some(cached) => {
            debug!(?kind, generation, "plan cache hit");
            cached
        }
        None => {
            let plans = Arc::new(run_search(kind, request, Arc::clone(&snapshot), Arc::clone(&state.config)).await?);
            state
                .plans
                .insert(kind, &request, generation, Arc::clone(&plans))
                .await;
            plans
        }
    };

    let results = plans
        .iter()
        .map(|plan| RoutePlanResult::from_plan(plan, &snapshot))
        .collect();

    Ok(Json(results))
}

/// Run a search on the blocking pool, bounded by the configured timeout.
///
/// A blocking task cannot be aborted, so after a timeout the search keeps
/// running until it finishes or reaches its own deadline (the transfer scan
/// checks the same timeout between stop pairs). Its result is discarded.
async fn run_search(
    kind: PlanKind,
    request: SearchRequest,
    snapshot: Arc<CatalogSnapshot>,
    config: Arc<PlannerConfig>,
) -> Result<Vec<RoutePlan>, AppError> {
    let timeout = config.search_timeout();
    let task = tokio::task::spawn_blocking(move || {
        let planner = RoutePlanner::new(snapshot.as_ref(), snapshot.as_ref(), config.as_ref());
        match kind {
            PlanKind::Direct => planner.find_direct_routes(&request),
            PlanKind::Transfer => planner.find_transfer_routes(&request),
        }
    });

    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(result)) => result.map_err(AppError::from),
        Ok(Err(e)) => Err(AppError::Internal {
            message: format!("search task failed: {e}"),
        }),
        Err(_) => Err(SearchError::Timeout.into()),
    }
}

/// Stops near a point, in catalog order.
async fn nearby_stops(
    State(state): State<AppState>,
    query: Result<Query<NearbyQuery>, QueryRejection>,
) -> Result<Json<Vec<StopResult>>, AppError> {
    let Query(query) = query?;
    let center = Coordinate::new(query.latitude, query.longitude)?;
    let radius_km = query.radius_km.unwrap_or(DEFAULT_STOP_RADIUS_KM);
    let snapshot = state.catalog.snapshot().await;

    let planner = RoutePlanner::new(snapshot.as_ref(), snapshot.as_ref(), state.config.as_ref());
    let stops = planner
        .nearby_stops(&center, radius_km)
        .into_iter()
        .map(StopResult::from_stop)
        .collect();

    Ok(Json(stops))
}

/// Every bus, ordered by number.
async fn list_buses(State(state): State<AppState>) -> Json<Vec<BusResult>> {
    let buses = state.fleet.all().await;
    Json(buses.iter().map(BusResult::from_bus).collect())
}

/// Buses whose number contains the query, ignoring case.
async fn search_buses(
    State(state): State<AppState>,
    query: Result<Query<BusSearchQuery>, QueryRejection>,
) -> Result<Json<Vec<BusResult>>, AppError> {
    let Query(query) = query?;
    let buses = state.fleet.search_by_number(&query.number).await;
    Ok(Json(buses.iter().map(BusResult::from_bus).collect()))
}

async fn get_bus(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BusResult>, AppError> {
    let id = BusId::new(id)?;
    let bus = state
        .fleet
        .get(&id)
        .await
        .ok_or_else(|| FleetError::UnknownBus(id.clone()))?;

    Ok(Json(BusResult::from_bus(&bus)))
}

/// Record a reported position for a bus.
async fn update_bus_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
    req: Result<Json<LocationUpdateRequest>, JsonRejection>,
) -> Result<Json<BusResult>, AppError> {
    let Json(req) = req?;
    let id = BusId::new(id)?;
    let location = Coordinate::new(req.latitude, req.longitude)?;
    if !req.speed.is_finite() || req.speed < 0.0 {
        return Err(AppError::BadRequest {
            message: format!("invalid speed: {}", req.speed),
        });
    }

    let bus = state
        .fleet
        .update_location(&id, location, req.speed, Utc::now())
        .await?;

    Ok(Json(BusResult::from_bus(&bus)))
}

/// Every tourist spot.
async fn list_spots(State(state): State<AppState>) -> Json<Vec<SpotResult>> {
    Json(state.spots.all().iter().map(SpotResult::from_spot).collect())
}

/// Tourist spots near a point.
async fn nearby_spots(
    State(state): State<AppState>,
    query: Result<Query<NearbyQuery>, QueryRejection>,
) -> Result<Json<Vec<SpotResult>>, AppError> {
    let Query(query) = query?;
    let center = Coordinate::new(query.latitude, query.longitude)?;
    let radius_km = query.radius_km.unwrap_or(DEFAULT_SPOT_RADIUS_KM);

    let spots = state
        .spots
        .nearby(&center, radius_km)
        .into_iter()
        .map(SpotResult::from_spot)
        .collect();

    Ok(Json(spots))
}

/// Re-read stops and routes from the seed file and drop cached plans.
async fn reload_catalog(State(state): State<AppState>) -> Result<Json<CatalogResult>, AppError> {
    let path = state.seed_path.as_deref().ok_or_else(|| AppError::NotFound {
        message: "catalog reload is not enabled".to_string(),
    })?;

    let snapshot = state.catalog.reload(path).await?;
    debug!(
        generation = snapshot.generation(),
        entries = state.plans.entry_count(),
        "dropping cached plans"
    );
    state.plans.invalidate_all();

    Ok(Json(CatalogResult::from_snapshot(&snapshot)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Timeout { message: String },
    Internal { message: String },
}

impl From<InvalidCoordinate> for AppError {
    fn from(e: InvalidCoordinate) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidId> for AppError {
    fn from(e: InvalidId) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<FleetError> for AppError {
    fn from(e: FleetError) -> Self {
        match e {
            FleetError::UnknownBus(_) => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidRequest(message) => AppError::BadRequest { message },
            SearchError::Timeout => AppError::Timeout {
                message: e.to_string(),
            },
            SearchError::Domain(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Timeout { message } => (StatusCode::GATEWAY_TIMEOUT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use chrono::TimeZone;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::cache::CacheConfig;
    use crate::catalog::TransitCatalog;
    use crate::domain::{BusPosition, Route, RouteId, SpotId, Stop, StopId, TouristSpot};
    use crate::fleet::FleetRegistry;
    use crate::spots::SpotDirectory;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    fn stop(id: &str, lat: f64, lng: f64, routes: &[&str]) -> Stop {
        Stop::new(
            StopId::new(id).unwrap(),
            format!("Stop {id}"),
            coord(lat, lng),
            routes.iter().map(|r| RouteId::new(*r).unwrap()).collect(),
        )
    }

    fn bus(id: &str, number: &str) -> BusPosition {
        BusPosition {
            id: BusId::new(id).unwrap(),
            number: number.into(),
            route_name: "500D".into(),
            location: coord(12.97, 77.59),
            speed_kmh: 0.0,
            occupancy: 10,
            last_updated: Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap(),
        }
    }

    fn spot(id: &str, lat: f64, lng: f64) -> TouristSpot {
        TouristSpot {
            id: SpotId::new(id).unwrap(),
            name: format!("Spot {id}"),
            description: String::new(),
            location: coord(lat, lng),
            category: "Park".into(),
            rating: Some(4.0),
            image_url: None,
        }
    }

    fn test_state() -> AppState {
        let catalog = TransitCatalog::new(
            vec![
                stop("A", 0.0, 0.0, &["1"]),
                stop("B", 0.0, 0.0054, &["1"]),
                stop("C", 0.0, 0.1, &["2"]),
                stop("T", 0.05, 0.05, &["1", "2"]),
            ],
            vec![Route {
                id: RouteId::new("1").unwrap(),
                name: "Central Line".into(),
            }],
        )
        .unwrap();
        let fleet = FleetRegistry::new([bus("b2", "KA-57-F-2"), bus("b1", "KA-01-F-1")]);
        let spots = SpotDirectory::new(vec![spot("near", 0.0, 0.01), spot("far", 1.0, 1.0)]);

        AppState::new(
            catalog,
            fleet,
            spots,
            PlannerConfig::default(),
            &CacheConfig::default(),
        )
    }

    async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
        let response = create_router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        send(state, request).await
    }

    async fn post_json(state: AppState, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(state, request).await
    }

    #[test]
    fn router_creation() {
        let _router = create_router(test_state());
    }

    #[tokio::test]
    async fn health_is_ok() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = create_router(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn direct_route_found() {
        let (status, body) = get_json(
            test_state(),
            "/api/routes/direct?fromLat=0&fromLng=0&toLat=0&toLng=0.0054",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let plans = body.as_array().unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0]["totalDurationMinutes"], 10);
        assert_eq!(plans[0]["estimatedFare"], 15.0);
        assert_eq!(plans[0]["segments"][1]["routeName"], "Central Line");
        assert_eq!(plans[0]["segments"][1]["startStop"]["id"], "A");
        assert_eq!(plans[0]["segments"][1]["endStop"]["id"], "B");
    }

    #[tokio::test]
    async fn transfer_route_found() {
        let state = test_state();
        let uri = "/api/routes/transfer?fromLat=0&fromLng=0&toLat=0&toLng=0.1";

        let (status, body) = get_json(state.clone(), uri).await;
        assert_eq!(status, StatusCode::OK);
        let plans = body.as_array().unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0]["transferCount"], 1);
        assert_eq!(plans[0]["estimatedFare"], 25.0);
        assert_eq!(plans[0]["segments"][1]["endStop"]["id"], "T");
        assert_eq!(plans[0]["segments"][3]["routeName"], "Route 2");

        let (_, direct) = get_json(
            state,
            "/api/routes/direct?fromLat=0&fromLng=0&toLat=0&toLng=0.1",
        )
        .await;
        assert_eq!(direct, json!([]));
    }

    #[tokio::test]
    async fn search_results_are_cached_per_generation() {
        let state = test_state();
        let (status, _) = get_json(
            state.clone(),
            "/api/routes/direct?fromLat=0&fromLng=0&toLat=0&toLng=0.0054",
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let request = SearchRequest::new(coord(0.0, 0.0), coord(0.0, 0.0054));
        let cached = state.plans.get(PlanKind::Direct, &request, 1).await.unwrap();
        assert_eq!(cached.len(), 1);
        assert!(state.plans.get(PlanKind::Transfer, &request, 1).await.is_none());
    }

    #[tokio::test]
    async fn invalid_coordinates_are_bad_requests() {
        let (status, body) = get_json(
            test_state(),
            "/api/routes/direct?fromLat=95&fromLng=0&toLat=0&toLng=0",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "invalid coordinate: latitude must be between -90 and 90"
        );

        let (status, _) = get_json(
            test_state(),
            "/api/routes/transfer?fromLat=NaN&fromLng=0&toLat=0&toLng=0",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = get_json(test_state(), "/api/routes/direct?fromLat=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("fromLng"));
    }

    #[tokio::test]
    async fn malformed_parameters_get_json_errors() {
        let (status, body) = get_json(
            test_state(),
            "/api/routes/stops/nearby?latitude=north&longitude=0",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, body) = get_json(test_state(), "/api/buses/search").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("number"));

        let (status, body) = get_json(test_state(), "/api/tourist-spots/nearby?latitude=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("longitude"));

        let (status, body) = post_json(
            test_state(),
            "/api/buses/b1/location",
            json!({"latitude": "high"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    const RELOADED_SEED: &str = r#"{
        "stops": [
            {"id": "A", "name": "Stop A", "location": {"latitude": 0.0, "longitude": 0.0}, "routes": ["9"]},
            {"id": "B", "name": "Stop B", "location": {"latitude": 0.0, "longitude": 0.0054}, "routes": ["9"]}
        ],
        "routes": [{"id": "9", "name": "Night Line"}]
    }"#;

    #[tokio::test]
    async fn reload_swaps_catalog_and_drops_cached_plans() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, RELOADED_SEED).unwrap();
        let state = test_state().with_seed_path(&path);
        let uri = "/api/routes/direct?fromLat=0&fromLng=0&toLat=0&toLng=0.0054";

        let (_, before) = get_json(state.clone(), uri).await;
        assert_eq!(before[0]["segments"][1]["routeName"], "Central Line");

        let request = Request::builder()
            .method("POST")
            .uri("/api/catalog/reload")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(state.clone(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"generation": 2, "stopCount": 2, "routeCount": 1}));

        let search = SearchRequest::new(coord(0.0, 0.0), coord(0.0, 0.0054));
        assert!(state.plans.get(PlanKind::Direct, &search, 1).await.is_none());

        let (_, after) = get_json(state.clone(), uri).await;
        assert_eq!(after[0]["segments"][1]["busNumber"], "9");
        assert_eq!(after[0]["segments"][1]["routeName"], "Night Line");
        assert!(state.plans.get(PlanKind::Direct, &search, 2).await.is_some());
    }

    #[tokio::test]
    async fn reload_failures() {
        let request = || {
            Request::builder()
                .method("POST")
                .uri("/api/catalog/reload")
                .body(Body::empty())
                .unwrap()
        };

        let (status, body) = send(test_state(), request()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "catalog reload is not enabled");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, "{ not json").unwrap();
        let state = test_state().with_seed_path(&path);

        let (status, body) = send(state.clone(), request()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().starts_with("failed to parse seed data"));
        assert_eq!(state.catalog.snapshot().await.generation(), 1);
    }

    #[tokio::test]
    async fn nearby_stops_default_radius() {
        let (status, body) = get_json(
            test_state(),
            "/api/routes/stops/nearby?latitude=0&longitude=0",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["id"], "A");
        assert_eq!(body[0]["busRoutes"], json!(["1"]));

        let (_, body) = get_json(
            test_state(),
            "/api/routes/stops/nearby?latitude=0&longitude=0&radiusKm=1",
        )
        .await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn buses_listed_and_searched() {
        let (status, body) = get_json(test_state(), "/api/buses").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["number"], "KA-01-F-1");
        assert_eq!(body[1]["number"], "KA-57-F-2");
        assert_eq!(body[0]["routeName"], "500D");

        let (_, body) = get_json(test_state(), "/api/buses/search?number=ka-57").await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["id"], "b2");
    }

    #[tokio::test]
    async fn bus_by_id() {
        let (status, body) = get_json(test_state(), "/api/buses/b1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["occupancy"], 10);

        let (status, body) = get_json(test_state(), "/api/buses/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "unknown bus: nope");
    }

    #[tokio::test]
    async fn location_update() {
        let state = test_state();
        let (status, body) = post_json(
            state.clone(),
            "/api/buses/b1/location",
            json!({"latitude": 12.98, "longitude": 77.6, "speed": 31.5}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["latitude"], 12.98);
        assert_eq!(body["speed"], 31.5);

        let stored = state.fleet.get(&BusId::new("b1").unwrap()).await.unwrap();
        assert_eq!(stored.location, coord(12.98, 77.6));
        assert!(stored.last_updated > Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap());
    }

    #[tokio::test]
    async fn location_update_rejections() {
        let (status, _) = post_json(
            test_state(),
            "/api/buses/nope/location",
            json!({"latitude": 12.98, "longitude": 77.6}),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = post_json(
            test_state(),
            "/api/buses/b1/location",
            json!({"latitude": 12.98, "longitude": 181.0}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = post_json(
            test_state(),
            "/api/buses/b1/location",
            json!({"latitude": 12.98, "longitude": 77.6, "speed": -3.0}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid speed: -3");
    }

    #[tokio::test]
    async fn tourist_spots() {
        let (status, body) = get_json(test_state(), "/api/tourist-spots").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);

        let (status, body) = get_json(
            test_state(),
            "/api/tourist-spots/nearby?latitude=0&longitude=0",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "Spot near");
        assert_eq!(body[0]["rating"], 4.0);
    }
}
