//! Planner configuration.

use std::time::Duration as StdDuration;

use chrono::Duration;

/// Configuration parameters for route planning.
///
/// The defaults reproduce the fixed values riders have always been quoted:
/// 3 minutes walking to the first stop, 2 from the last, 5 between stops on
/// a transfer, buses at 25 km/h with a 5-minute floor per ride, and flat
/// fares of 15.0 direct and 25.0 with one transfer.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Radius around each endpoint to search for stops (km).
    pub stop_radius_km: f64,

    /// Maximum number of direct plans to return.
    pub max_direct_results: usize,

    /// Maximum number of transfer plans to return.
    pub max_transfer_results: usize,

    /// Average bus speed used to estimate ride time (km/h).
    pub bus_speed_kmh: f64,

    /// Shortest ride time quoted for any bus leg (minutes).
    pub min_bus_mins: i64,

    /// Walk from the origin to the boarding stop.
    pub walk_to_stop_mins: i64,
    pub walk_to_stop_km: f64,

    /// Walk between stops when changing buses.
    pub transfer_walk_mins: i64,
    pub transfer_walk_km: f64,

    /// Walk from the alighting stop to the destination.
    pub walk_from_stop_mins: i64,
    pub walk_from_stop_km: f64,

    /// Flat fare for a single bus.
    pub direct_fare: f64,

    /// Flat fare for two buses with one transfer.
    pub transfer_fare: f64,

    /// Build a transfer plan for every pair of shared routes instead of only
    /// the first route on each leg.
    pub enumerate_transfer_routes: bool,

    /// Upper bound on wall-clock time for one search.
    pub search_timeout_ms: u64,
}

impl PlannerConfig {
    /// Set the stop search radius.
    pub fn with_stop_radius_km(mut self, radius_km: f64) -> Self {
        self.stop_radius_km = radius_km;
        self
    }

    /// Set the result limits for direct and transfer searches.
    pub fn with_result_limits(mut self, direct: usize, transfer: usize) -> Self {
        self.max_direct_results = direct;
        self.max_transfer_results = transfer;
        self
    }

    /// Enable or disable enumerating every route pair on transfers.
    pub fn with_enumerate_transfer_routes(mut self, enabled: bool) -> Self {
        self.enumerate_transfer_routes = enabled;
        self
    }

    /// Set the search timeout.
    pub fn with_search_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.search_timeout_ms = timeout_ms;
        self
    }

    /// Returns the minimum bus ride as a Duration.
    pub fn min_bus(&self) -> Duration {
        Duration::minutes(self.min_bus_mins)
    }

    /// Returns the walk to the boarding stop as a Duration.
    pub fn walk_to_stop(&self) -> Duration {
        Duration::minutes(self.walk_to_stop_mins)
    }

    /// Returns the transfer walk as a Duration.
    pub fn transfer_walk(&self) -> Duration {
        Duration::minutes(self.transfer_walk_mins)
    }

    /// Returns the walk from the alighting stop as a Duration.
    pub fn walk_from_stop(&self) -> Duration {
        Duration::minutes(self.walk_from_stop_mins)
    }

    /// Returns the search timeout as a std Duration.
    pub fn search_timeout(&self) -> StdDuration {
        StdDuration::from_millis(self.search_timeout_ms)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            stop_radius_km: 0.5,
            max_direct_results: 3,
            max_transfer_results: 5,
            bus_speed_kmh: 25.0,
            min_bus_mins: 5,
            walk_to_stop_mins: 3,
            walk_to_stop_km: 0.2,
            transfer_walk_mins: 5,
            transfer_walk_km: 0.1,
            walk_from_stop_mins: 2,
            walk_from_stop_km: 0.1,
            direct_fare: 15.0,
            transfer_fare: 25.0,
            enumerate_transfer_routes: false,
            search_timeout_ms: 2_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.stop_radius_km, 0.5);
        assert_eq!(config.max_direct_results, 3);
        assert_eq!(config.max_transfer_results, 5);
        assert_eq!(config.bus_speed_kmh, 25.0);
        assert_eq!(config.min_bus_mins, 5);
        assert_eq!(config.direct_fare, 15.0);
        assert_eq!(config.transfer_fare, 25.0);
        assert!(!config.enumerate_transfer_routes);
    }

    #[test]
    fn duration_methods() {
        let config = PlannerConfig::default();

        assert_eq!(config.min_bus(), Duration::minutes(5));
        assert_eq!(config.walk_to_stop(), Duration::minutes(3));
        assert_eq!(config.transfer_walk(), Duration::minutes(5));
        assert_eq!(config.walk_from_stop(), Duration::minutes(2));
        assert_eq!(config.search_timeout(), StdDuration::from_secs(2));
    }

    #[test]
    fn builder_setters() {
        let config = PlannerConfig::default()
            .with_stop_radius_km(1.0)
            .with_result_limits(10, 20)
            .with_enumerate_transfer_routes(true)
            .with_search_timeout_ms(50);

        assert_eq!(config.stop_radius_km, 1.0);
        assert_eq!(config.max_direct_results, 10);
        assert_eq!(config.max_transfer_results, 20);
        assert!(config.enumerate_transfer_routes);
        assert_eq!(config.search_timeout_ms, 50);
    }
}
