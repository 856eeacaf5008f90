//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::fleet::SimulationConfig;

/// Seed file when `BUS_SERVER_SEED` is unset.
pub const DEFAULT_SEED_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/seed.json");

/// Error reading configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// JSON file with stops, routes, buses and spots.
    pub seed_path: PathBuf,

    /// Time between simulated movement ticks; `None` disables the simulation.
    pub simulation_interval: Option<Duration>,

    /// How long search results stay cached.
    pub plan_cache_ttl: Duration,
}

impl ServerConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset vars.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let addr = parse_or(&lookup, "BUS_SERVER_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)))?;
        let seed_path = lookup("BUS_SERVER_SEED")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_PATH));
        let simulation_secs: u64 = parse_or(&lookup, "BUS_SIMULATION_SECS", 10)?;
        let cache_secs: u64 = parse_or(&lookup, "BUS_PLAN_CACHE_SECS", 30)?;

        Ok(Self {
            addr,
            seed_path,
            simulation_interval: (simulation_secs > 0).then(|| Duration::from_secs(simulation_secs)),
            plan_cache_ttl: Duration::from_secs(cache_secs),
        })
    }

    /// Cache settings derived from this config.
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            ttl: self.plan_cache_ttl,
            ..CacheConfig::default()
        }
    }

    /// Simulation settings, if the simulation is enabled.
    pub fn simulation_config(&self) -> Option<SimulationConfig> {
        self.simulation_interval.map(|interval| SimulationConfig {
            interval,
            ..SimulationConfig::default()
        })
    }
}

fn invalid(var: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
    }
}

fn parse_or<T, F>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|_| invalid(var, &raw)),
        None => Ok(default),
    }
}
