//! Simulated bus movement.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::domain::BusPosition;

use super::FleetRegistry;

/// Parameters for the movement simulation.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Time between ticks.
    pub interval: Duration,

    /// Largest per-axis offset applied in one tick (degrees).
    pub max_offset_deg: f64,

    /// Range of simulated speeds (km/h), lower bound inclusive.
    pub min_speed_kmh: f64,
    pub max_speed_kmh: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
            max_offset_deg: 0.0005,
            min_speed_kmh: 20.0,
            max_speed_kmh: 60.0,
        }
    }
}

/// Nudge one bus by a random offset and give it a random speed.
pub fn jitter<R: Rng>(
    bus: &mut BusPosition,
    rng: &mut R,
    config: &SimulationConfig,
    at: DateTime<Utc>,
) {
    let max = config.max_offset_deg.abs();
    let delta_lat = sample(rng, -max, max);
    let delta_lng = sample(rng, -max, max);
    let speed = sample(rng, config.min_speed_kmh, config.max_speed_kmh);

    let location = bus.location.offset(delta_lat, delta_lng);
    bus.relocate(location, speed, at);
}

/// Uniform draw from `[low, high)`, or `low` when the range is empty.
fn sample<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if low < high { rng.gen_range(low..high) } else { low }
}

/// Move every bus in the fleet once.
pub async fn simulate_tick<R: Rng + Send>(fleet: &FleetRegistry, rng: &mut R, config: &SimulationConfig) {
    let now = Utc::now();
    fleet.update_all(|bus| jitter(bus, rng, config, now)).await;
}

/// Run the simulation until the returned task is aborted.
pub fn spawn_simulation(fleet: FleetRegistry, config: SimulationConfig) -> JoinHandle<()> {
    info!(interval_secs = config.interval.as_secs(), "starting bus movement simulation");
    tokio::spawn(async move {
        let mut rng = StdRng::from_entropy();
        let mut interval = tokio::time::interval(config.interval);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            simulate_tick(&fleet, &mut rng, &config).await;
            debug!("simulated bus movement");
        }
    })
}
