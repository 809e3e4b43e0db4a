//! Planner entry points.
//!
//! Each operation pulls what it needs from the [`StationSupplier`], runs one
//! of the graph or optimization algorithms, and maps station ids in the
//! result back to full [`Station`] records.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{DomainError, Path, Station, StationId};
use crate::graph::{
    AdjacencyGraph, all_simple_paths, bfs_shortest_hops, dijkstra_shortest_path, exists_path,
    greedy_route,
};
use crate::network::StationSupplier;
use crate::optimize::{Selection, build_cost_matrix, maximize_value, solve_tsp, sort_by_name};

use super::config::PlannerConfig;

/// Errors that can occur during planning.
///
/// Unknown stations are not errors; they produce empty results.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Request parameters outside the configured limits
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A route resolved to station records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub stations: Vec<Station>,
    /// Connections travelled, counted on the underlying path so stations
    /// missing from the supplier do not shorten it.
    pub hops: usize,
    /// Summed travel time, for routes found by a time-weighted search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_minutes: Option<u64>,
}

/// Route planner.
pub struct Planner<'a, S: StationSupplier> {
    supplier: &'a S,
    config: &'a PlannerConfig,
}

impl<'a, S: StationSupplier> Planner<'a, S> {
    /// Create a new planner.
    pub fn new(supplier: &'a S, config: &'a PlannerConfig) -> Self {
        Self { supplier, config }
    }

    /// Whether the stations with these names are connected.
    ///
    /// An unresolvable name answers `false`.
    pub fn path_exists(&self, from_name: &str, to_name: &str) -> bool {
        let Some((from, to)) = self.resolve_names(from_name, to_name) else {
            return false;
        };
        let graph = AdjacencyGraph::from_edges(self.supplier.all_edges());
        exists_path(&graph, &from, &to)
    }

    /// Every simple path between two named stations, up to `max_depth`
    /// edges (the configured default when `None`).
    pub fn all_paths(
        &self,
        from_name: &str,
        to_name: &str,
        max_depth: Option<usize>,
    ) -> Result<Vec<Vec<Station>>, PlanError> {
        let max_depth = max_depth.unwrap_or(self.config.default_max_depth);
        if max_depth > self.config.max_depth_limit {
            return Err(PlanError::InvalidRequest(format!(
                "maxDepth {max_depth} exceeds the limit of {}",
                self.config.max_depth_limit
            )));
        }

        let Some((from, to)) = self.resolve_names(from_name, to_name) else {
            return Ok(Vec::new());
        };
        let graph = AdjacencyGraph::from_edges(self.supplier.all_edges());

        Ok(all_simple_paths(&graph, &from, &to, max_depth)
            .iter()
            .map(|path| self.resolve_stations(path.stations()))
            .collect())
    }

    /// The route with the fewest hops, queried from the supplier
    /// station by station.
    pub fn minimum_route(&self, from: &StationId, to: &StationId) -> Option<Route> {
        let path = bfs_shortest_hops(self.supplier, from, to)?;
        Some(self.route(&path, None))
    }

    /// The minimum-time route between two named stations.
    pub fn fastest_route(&self, from_name: &str, to_name: &str) -> Option<Route> {
        let (from, to) = self.resolve_names(from_name, to_name)?;
        let found = dijkstra_shortest_path(self.supplier, &from, &to)?;
        Some(self.route(&found.path, Some(found.cost)))
    }

    /// A heuristic route that always steps toward the destination.
    pub fn greedy_route(&self, from: &StationId, to: &StationId) -> Option<Route> {
        let locate = |id: &StationId| {
            self.supplier
                .station(id)
                .and_then(|station| station.position().copied())
        };
        let path = greedy_route(
            self.supplier,
            locate,
            from,
            to,
            self.config.greedy_step_limit,
        )?;
        Some(self.route(&path, None))
    }

    /// The cheapest round trip from the first station through all others.
    ///
    /// Fewer than two stations, or any pair with no connecting route,
    /// yields `None`.
    pub fn optimal_tour(&self, ids: &[StationId]) -> Result<Option<Route>, PlanError> {
        if ids.len() < 2 {
            return Ok(None);
        }
        if ids.len() > self.config.max_tour_stations {
            return Err(PlanError::InvalidRequest(format!(
                "a tour may include at most {} stations (got {})",
                self.config.max_tour_stations,
                ids.len()
            )));
        }

        let mut seen = HashSet::new();
        if let Some(repeated) = ids.iter().find(|id| !seen.insert(*id)) {
            return Err(PlanError::InvalidRequest(format!(
                "station {repeated} is listed more than once"
            )));
        }

        let matrix = match build_cost_matrix(self.supplier, ids) {
            Ok(matrix) => matrix,
            Err(leg) => {
                debug!(%leg, "no tour");
                return Ok(None);
            }
        };

        let Some(tour) = solve_tsp(&matrix) else {
            return Ok(None);
        };
        let order: Vec<StationId> = tour.order.iter().map(|&i| ids[i].clone()).collect();

        Ok(Some(Route {
            stations: self.resolve_stations(&order),
            hops: order.len() - 1,
            total_minutes: Some(tour.cost),
        }))
    }

    /// The most interesting set of stations that can be visited within
    /// `time_limit` minutes.
    pub fn maximize_interest(&self, time_limit: i64) -> Result<Selection, PlanError> {
        if time_limit < 0 {
            return Err(DomainError::NegativeCapacity(time_limit).into());
        }
        if time_limit > self.config.max_time_budget {
            return Err(PlanError::InvalidRequest(format!(
                "time budget {time_limit} exceeds the limit of {}",
                self.config.max_time_budget
            )));
        }

        let capacity = u32::try_from(time_limit).map_err(|_| {
            PlanError::InvalidRequest(format!("time budget {time_limit} is out of range"))
        })?;
        Ok(maximize_value(&self.supplier.optimizer_items(), capacity))
    }

    /// Every station, ordered by name ignoring case.
    pub fn stations_sorted_by_name(&self) -> Vec<Station> {
        sort_by_name(self.supplier.all_stations())
    }

    fn resolve_names(&self, from_name: &str, to_name: &str) -> Option<(StationId, StationId)> {
        let from = self.supplier.resolve_id_by_name(from_name);
        let to = self.supplier.resolve_id_by_name(to_name);
        if from.is_none() || to.is_none() {
            debug!(from = from_name, to = to_name, "station name did not resolve");
        }
        Some((from?, to?))
    }

    fn route(&self, path: &Path, total_minutes: Option<u64>) -> Route {
        Route {
            stations: self.resolve_stations(path.stations()),
            hops: path.hops(),
            total_minutes,
        }
    }

    fn resolve_stations(&self, ids: &[StationId]) -> Vec<Station> {
        ids.iter()
            .filter_map(|id| {
                let station = self.supplier.station(id);
                if station.is_none() {
                    warn!(station = %id, "skipping unknown station in result");
                }
                station
            })
            .collect()
    }
}
