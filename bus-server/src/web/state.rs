//! Application state for the web layer.

use std::path::PathBuf;
use std::sync::Arc;

use crate::cache::{CacheConfig, PlanCache};
use crate::catalog::TransitCatalog;
use crate::fleet::FleetRegistry;
use crate::planner::PlannerConfig;
use crate::spots::SpotDirectory;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Stops and routes the planner searches over
    pub catalog: TransitCatalog,

    /// Live bus positions
    pub fleet: FleetRegistry,

    /// Tourist spots
    pub spots: SpotDirectory,

    /// Route planner configuration
    pub config: Arc<PlannerConfig>,

    /// Recent search results
    pub plans: PlanCache,

    /// Seed file the catalog is reloaded from, if reloads are enabled
    pub seed_path: Option<Arc<PathBuf>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        catalog: TransitCatalog,
        fleet: FleetRegistry,
        spots: SpotDirectory,
        config: PlannerConfig,
        cache_config: &CacheConfig,
    ) -> Self {
        Self {
            catalog,
            fleet,
            spots,
            config: Arc::new(config),
            plans: PlanCache::new(cache_config),
            seed_path: None,
        }
    }

    /// Allow the catalog to be reloaded from `path`.
    pub fn with_seed_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_path = Some(Arc::new(path.into()));
        self
    }
}
