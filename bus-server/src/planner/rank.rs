//! Plan ranking for search results.

use crate::domain::RoutePlan;

/// Rank plans by total travel time and keep the best `limit`.
///
/// The sort is stable: plans with equal duration stay in the order they were
/// generated.
pub fn rank_plans(mut plans: Vec<RoutePlan>, limit: usize) -> Vec<RoutePlan> {
    plans.sort_by_key(RoutePlan::total_duration);
    plans.truncate(limit);
    plans
}
