//! Limits applied by the route planner.

use crate::graph::DEFAULT_MAX_DEPTH;

/// Configuration parameters for route planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Depth bound for simple-path enumeration when the caller gives none.
    pub default_max_depth: usize,

    /// Largest depth bound a caller may request.
    /// Enumeration is combinatorial in depth, so this caps the work.
    pub max_depth_limit: usize,

    /// Largest station subset accepted for an optimal tour.
    pub max_tour_stations: usize,

    /// Largest time budget (minutes) accepted by the optimizer.
    /// The optimizer's table grows linearly with the budget.
    pub max_time_budget: i64,

    /// Moves allowed before the greedy router gives up.
    pub greedy_step_limit: usize,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        default_max_depth: usize,
        max_depth_limit: usize,
        max_tour_stations: usize,
        max_time_budget: i64,
        greedy_step_limit: usize,
    ) -> Self {
        Self {
            default_max_depth,
            max_depth_limit,
            max_tour_stations,
            max_time_budget,
            greedy_step_limit,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_max_depth: DEFAULT_MAX_DEPTH,
            max_depth_limit: 64,
            max_tour_stations: 12,
            max_time_budget: 10_000,
            greedy_step_limit: 1000,
        }
    }
}
