//! Shortest-path solvers.
//!
//! Both solvers run against any [`NeighborProvider`]. Over a pre-built
//! [`AdjacencyGraph`](super::AdjacencyGraph) a neighbour lookup is a borrowed
//! O(1) slice; over the data supplier every expansion is a separate query
//! returning owned data. Dijkstra is therefore O((V + E) log V) on the graph
//! and O(V log V · query-cost) on the supplier.

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::{Path, StationId};

use super::provider::NeighborProvider;

/// Predecessor of each discovered station; `None` marks the search origin.
type Parents = HashMap<StationId, Option<StationId>>;

/// A path together with its summed traversal time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightedPath {
    pub path: Path,
    /// Total minutes along the path.
    pub cost: u64,
}

/// Find the path from `start` to `end` with the fewest hops.
///
/// Weights are ignored. Returns `None` if `start` is unknown to the provider
/// or `end` is never reached. When several paths share the minimum hop
/// count, the one discovered first (following neighbour enumeration order)
/// wins.
pub fn bfs_shortest_hops<P>(provider: &P, start: &StationId, end: &StationId) -> Option<Path>
where
    P: NeighborProvider + ?Sized,
{
    if !provider.contains(start) {
        return None;
    }

    // parents doubles as the visited set
    let mut parents: Parents = HashMap::from([(start.clone(), None)]);
    let mut queue = VecDeque::from([start.clone()]);
    let mut expanded = 0usize;

    while let Some(current) = queue.pop_front() {
        if &current == end {
            debug!(start = %start, end = %end, expanded, "BFS reached destination");
            return Some(reconstruct(&parents, end));
        }

        expanded += 1;
        for neighbor in provider.neighbor_ids(&current) {
            if let Entry::Vacant(slot) = parents.entry(neighbor) {
                queue.push_back(slot.key().clone());
                slot.insert(Some(current.clone()));
            }
        }
    }

    debug!(start = %start, end = %end, expanded, "BFS exhausted without reaching destination");
    None
}

/// Find the minimum-time path from `start` to `end`.
///
/// Returns `None` if `start` is unknown or `end` is unreachable.
pub fn dijkstra_shortest_path<P>(
    provider: &P,
    start: &StationId,
    end: &StationId,
) -> Option<WeightedPath>
where
    P: NeighborProvider + ?Sized,
{
    if !provider.contains(start) {
        return None;
    }

    let tree = ShortestPathTree::grow(provider, start, Some(end));
    let cost = *tree.distances.get(end)?;

    Some(WeightedPath {
        path: reconstruct(&tree.parents, end),
        cost,
    })
}

/// Minimum travel time from `source` to every station reachable from it.
///
/// The source itself is always present with distance 0.
pub fn dijkstra_times_from<P>(provider: &P, source: &StationId) -> HashMap<StationId, u64>
where
    P: NeighborProvider + ?Sized,
{
    ShortestPathTree::grow(provider, source, None).distances
}

/// Result of a (possibly truncated) Dijkstra run.
struct ShortestPathTree {
    distances: HashMap<StationId, u64>,
    parents: Parents,
}

impl ShortestPathTree {
    /// Run Dijkstra from `source`, stopping once `stop_at` is finalized.
    ///
    /// The frontier may hold stale duplicate entries; a station is expanded
    /// only the first time it is popped.
    fn grow<P>(provider: &P, source: &StationId, stop_at: Option<&StationId>) -> Self
    where
        P: NeighborProvider + ?Sized,
    {
        let mut distances = HashMap::from([(source.clone(), 0u64)]);
        let mut parents: Parents = HashMap::from([(source.clone(), None)]);
        let mut finalized: HashSet<StationId> = HashSet::new();
        let mut frontier = BinaryHeap::from([Reverse((0u64, source.clone()))]);

        while let Some(Reverse((distance, current))) = frontier.pop() {
            if !finalized.insert(current.clone()) {
                continue;
            }
            if stop_at == Some(&current) {
                break;
            }

            let neighbors = provider.neighbors(&current);
            trace!(
                station = %current,
                distance,
                neighbors = neighbors.len(),
                "Dijkstra expanding station"
            );

            for neighbor in neighbors.iter() {
                let candidate = distance + u64::from(neighbor.time.minutes());
                let improves = distances
                    .get(&neighbor.station)
                    .is_none_or(|&known| candidate < known);

                if improves {
                    distances.insert(neighbor.station.clone(), candidate);
                    parents.insert(neighbor.station.clone(), Some(current.clone()));
                    frontier.push(Reverse((candidate, neighbor.station.clone())));
                }
            }
        }

        debug!(
            source = %source,
            reached = distances.len(),
            finalized = finalized.len(),
            "Dijkstra complete"
        );

        Self { distances, parents }
    }
}

/// Walk predecessors back from `end` and reverse into a path.
///
/// `end` must be a key of `parents`.
fn reconstruct(parents: &Parents, end: &StationId) -> Path {
    let mut stations = vec![end.clone()];
    let mut current = end;

    while let Some(Some(parent)) = parents.get(current) {
        stations.push(parent.clone());
        current = parent;
    }

    stations.reverse();
    Path::from_simple(stations)
}
