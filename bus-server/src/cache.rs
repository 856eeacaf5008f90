//! Caching layer for route search results.
//!
//! Search results depend only on the two endpoints and the catalog contents,
//! so the key is (kind, exact coordinate bits, catalog generation). Replacing
//! the catalog bumps the generation, which leaves stale entries unreachable
//! until they expire or are invalidated.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{Coordinate, RoutePlan};
use crate::planner::{PlanKind, SearchRequest};

/// Cache key: (plan kind, origin bits, destination bits, generation).
type PlanKey = (PlanKind, [u64; 2], [u64; 2], u64);

/// Cached search result.
pub type PlanEntry = Arc<Vec<RoutePlan>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30),
            max_capacity: 1000,
        }
    }
}

fn coordinate_bits(c: &Coordinate) -> [u64; 2] {
    [c.latitude().to_bits(), c.longitude().to_bits()]
}

/// Cache for planner results.
#[derive(Clone)]
pub struct PlanCache {
    plans: MokaCache<PlanKey, PlanEntry>,
}

impl PlanCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let plans = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { plans }
    }

    fn key(kind: PlanKind, request: &SearchRequest, generation: u64) -> PlanKey {
        (
            kind,
            coordinate_bits(&request.origin),
            coordinate_bits(&request.destination),
            generation,
        )
    }

    /// Get cached plans for a search.
    pub async fn get(&self, kind: PlanKind, request: &SearchRequest, generation: u64) -> Option<PlanEntry> {
        self.plans.get(&Self::key(kind, request, generation)).await
    }

    /// Store the plans for a search.
    pub async fn insert(&self, kind: PlanKind, request: &SearchRequest, generation: u64, entry: PlanEntry) {
        self.plans
            .insert(Self::key(kind, request, generation), entry)
            .await;
    }

    /// Approximate number of cached searches.
    pub fn entry_count(&self) -> u64 {
        self.plans.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.plans.invalidate_all();
    }
}
