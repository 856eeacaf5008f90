use bus_server::catalog::{SeedData, TransitCatalog};
use bus_server::config::ServerConfig;
use bus_server::fleet::{FleetRegistry, spawn_simulation};
use bus_server::planner::PlannerConfig;
use bus_server::spots::SpotDirectory;
use bus_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,bus_server=debug")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid server configuration");

    // Load stops, routes, buses and spots (fail fast if unavailable)
    let seed = SeedData::load(&config.seed_path).expect("Failed to load seed data");
    info!(
        path = %config.seed_path.display(),
        stops = seed.stops.len(),
        routes = seed.routes.len(),
        "loaded seed data"
    );

    let catalog = TransitCatalog::new(seed.stops, seed.routes).expect("Invalid stop catalog");
    let fleet = FleetRegistry::new(seed.buses);
    let spots = SpotDirectory::new(seed.spots);

    if fleet.is_empty().await {
        warn!("no buses in seed data");
    }
    if spots.is_empty() {
        warn!("no tourist spots in seed data");
    }
    info!(buses = fleet.len().await, spots = spots.len(), "fleet and spots ready");

    if let Some(simulation) = config.simulation_config() {
        spawn_simulation(fleet.clone(), simulation);
    }

    let state = AppState::new(
        catalog,
        fleet,
        spots,
        PlannerConfig::default(),
        &config.cache_config(),
    )
    .with_seed_path(config.seed_path.clone());
    let app = create_router(state);

    info!(addr = %config.addr, "bus route planner listening");
    info!("  GET  /health");
    info!("  GET  /api/routes/direct?fromLat=&fromLng=&toLat=&toLng=");
    info!("  GET  /api/routes/transfer?fromLat=&fromLng=&toLat=&toLng=");
    info!("  GET  /api/routes/stops/nearby?latitude=&longitude=&radiusKm=");
    info!("  GET  /api/buses, /api/buses/search?number=, /api/buses/:id");
    info!("  POST /api/buses/:id/location");
    info!("  GET  /api/tourist-spots, /api/tourist-spots/nearby");
    info!("  POST /api/catalog/reload");

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
