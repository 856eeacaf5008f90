//! Stop catalog and route registry.
//!
//! The planner reads stops and route names through the [`StopCatalog`] and
//! [`RouteNames`] traits. The running server publishes them as immutable
//! [`CatalogSnapshot`]s behind a [`TransitCatalog`] handle, so a reload never
//! disturbs a query that is already running against the previous snapshot.

mod error;
mod seed;

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::domain::{Route, RouteId, Stop, StopId};

pub use error::CatalogError;
pub use seed::SeedData;

/// Source of the stops the planner searches over.
pub trait StopCatalog {
    /// Every known stop, in catalog order.
    fn stops(&self) -> &[Stop];
}

/// Source of display names for bus routes.
pub trait RouteNames {
    /// Label for `route` as shown on a bus segment.
    fn name_for_route(&self, route: &RouteId) -> String;
}

impl StopCatalog for Vec<Stop> {
    fn stops(&self) -> &[Stop] {
        self
    }
}

/// Route id → name lookup.
///
/// Routes missing from the registry are labelled `"Route {id}"`.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    names: HashMap<RouteId, String>,
}

impl RouteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from route records. Later records win on duplicate ids.
    pub fn from_routes(routes: impl IntoIterator<Item = Route>) -> Self {
        Self {
            names: routes.into_iter().map(|r| (r.id, r.name)).collect(),
        }
    }

    /// Returns the number of registered routes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl RouteNames for RouteRegistry {
    fn name_for_route(&self, route: &RouteId) -> String {
        self.names
            .get(route)
            .cloned()
            .unwrap_or_else(|| format!("Route {route}"))
    }
}

/// An immutable view of the catalog at one point in time.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    generation: u64,
    stops: Vec<Stop>,
    by_id: HashMap<StopId, usize>,
    routes: RouteRegistry,
}

impl CatalogSnapshot {
    /// Build a snapshot, rejecting duplicate stop ids.
    pub fn new(generation: u64, stops: Vec<Stop>, routes: RouteRegistry) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(stops.len());
        for (idx, stop) in stops.iter().enumerate() {
            match by_id.entry(stop.id.clone()) {
                Entry::Occupied(_) => return Err(CatalogError::DuplicateStop(stop.id.clone())),
                Entry::Vacant(slot) => {
                    slot.insert(idx);
                }
            }
        }

        Ok(Self {
            generation,
            stops,
            by_id,
            routes,
        })
    }

    /// Monotonic version of the catalog this snapshot was taken from.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Look up a stop by id.
    pub fn stop(&self, id: &StopId) -> Option<&Stop> {
        self.by_id.get(id).and_then(|&idx| self.stops.get(idx))
    }

    /// The route registry.
    pub fn routes(&self) -> &RouteRegistry {
        &self.routes
    }
}

impl StopCatalog for CatalogSnapshot {
    fn stops(&self) -> &[Stop] {
        &self.stops
    }
}

impl RouteNames for CatalogSnapshot {
    fn name_for_route(&self, route: &RouteId) -> String {
        self.routes.name_for_route(route)
    }
}

/// Shared, replaceable catalog handle.
///
/// Readers take an `Arc<CatalogSnapshot>` and keep it for the whole query;
/// writers swap in a new snapshot with the next generation number.
#[derive(Clone)]
pub struct TransitCatalog {
    inner: Arc<RwLock<Arc<CatalogSnapshot>>>,
}

impl TransitCatalog {
    /// Create a catalog holding generation 1 of the given data.
    pub fn new(stops: Vec<Stop>, routes: Vec<Route>) -> Result<Self, CatalogError> {
        let snapshot = CatalogSnapshot::new(1, stops, RouteRegistry::from_routes(routes))?;
        Ok(Self {
            inner: Arc::new(RwLock::new(Arc::new(snapshot))),
        })
    }

    /// Take the current snapshot.
    pub async fn snapshot(&self) -> Arc<CatalogSnapshot> {
        let guard = self.inner.read().await;
        Arc::clone(&guard)
    }

    /// Replace the catalog contents.
    ///
    /// On success returns the new generation. On failure the current
    /// snapshot is kept and the error is returned.
    pub async fn replace(&self, stops: Vec<Stop>, routes: Vec<Route>) -> Result<u64, CatalogError> {
        let mut guard = self.inner.write().await;
        let generation = guard.generation() + 1;
        let snapshot = CatalogSnapshot::new(generation, stops, RouteRegistry::from_routes(routes))?;
        *guard = Arc::new(snapshot);
        Ok(generation)
    }

    /// Re-read stops and routes from a seed file and publish them.
    ///
    /// Buses and spots in the file are ignored. On failure the current
    /// snapshot stays in place.
    pub async fn reload(&self, path: &Path) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        let seed = SeedData::load(path)?;
        let generation = self.replace(seed.stops, seed.routes).await?;

        let snapshot = self.snapshot().await;
        if snapshot.routes().is_empty() {
            warn!(generation, "reloaded catalog has no route names");
        }
        info!(
            path = %path.display(),
            generation,
            stops = snapshot.stops().len(),
            routes = snapshot.routes().len(),
            "reloaded stop catalog"
        );

        Ok(snapshot)
    }
}
