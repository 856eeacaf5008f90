//! Live bus fleet.
//!
//! Positions are held in memory behind a shared lock and updated either by
//! location reports or by the background movement simulation.

mod simulate;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{BusId, BusPosition, Coordinate};

pub use simulate::{SimulationConfig, jitter, simulate_tick, spawn_simulation};

/// Error from fleet operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FleetError {
    #[error("unknown bus: {0}")]
    UnknownBus(BusId),
}

/// Shared registry of bus positions.
///
/// Cheap to clone; all clones see the same fleet.
#[derive(Clone, Default)]
pub struct FleetRegistry {
    inner: Arc<RwLock<HashMap<BusId, BusPosition>>>,
}

impl FleetRegistry {
    /// Create a registry holding `buses`. Later entries win on duplicate ids.
    pub fn new(buses: impl IntoIterator<Item = BusPosition>) -> Self {
        let map = buses.into_iter().map(|b| (b.id.clone(), b)).collect();
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// Every bus, ordered by fleet number.
    pub async fn all(&self) -> Vec<BusPosition> {
        let guard = self.inner.read().await;
        sorted(guard.values().cloned().collect())
    }

    /// Buses whose number contains `query`, ignoring case, ordered by number.
    pub async fn search_by_number(&self, query: &str) -> Vec<BusPosition> {
        let guard = self.inner.read().await;
        sorted(
            guard
                .values()
                .filter(|b| b.number_matches(query))
                .cloned()
                .collect(),
        )
    }

    /// Look up a bus by id.
    pub async fn get(&self, id: &BusId) -> Option<BusPosition> {
        self.inner.read().await.get(id).cloned()
    }

    /// Record a reported position for `id` and return the updated bus.
    pub async fn update_location(
        &self,
        id: &BusId,
        location: Coordinate,
        speed_kmh: f64,
        at: DateTime<Utc>,
    ) -> Result<BusPosition, FleetError> {
        let mut guard = self.inner.write().await;
        let bus = guard
            .get_mut(id)
            .ok_or_else(|| FleetError::UnknownBus(id.clone()))?;
        bus.relocate(location, speed_kmh, at);
        debug!(bus = %id, location = %location, speed_kmh, "bus location updated");
        Ok(bus.clone())
    }

    /// Apply `f` to every bus under a single write lock.
    pub async fn update_all<F: FnMut(&mut BusPosition)>(&self, mut f: F) {
        let mut guard = self.inner.write().await;
        guard.values_mut().for_each(|bus| f(bus));
    }

    /// Returns the number of tracked buses.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Returns true if no buses are tracked.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

fn sorted(mut buses: Vec<BusPosition>) -> Vec<BusPosition> {
    buses.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.id.cmp(&b.id)));
    buses
}
