//! Greedy nearest-to-target routing.
//!
//! A heuristic entry point, offered alongside the exact solvers and never
//! used as a fallback for them.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{Coordinates, Path, StationId};

use super::provider::NeighborProvider;

/// Route from `start` to `end` by always stepping to the unvisited
/// neighbour closest (as the crow flies) to `end`.
///
/// `locate` supplies station positions; stations it cannot place are treated
/// as infinitely far away. Returns `None` on a dead end, when either
/// endpoint is unknown, or once `step_limit` moves have been made without
/// arriving. The result is a valid simple path but carries no optimality
/// guarantee.
pub fn greedy_route<P, L>(
    provider: &P,
    locate: L,
    start: &StationId,
    end: &StationId,
    step_limit: usize,
) -> Option<Path>
where
    P: NeighborProvider + ?Sized,
    L: Fn(&StationId) -> Option<Coordinates>,
{
    if !provider.contains(start) || !provider.contains(end) {
        return None;
    }

    let target = locate(end);
    let distance_to_target = |station: &StationId| match (locate(station), target) {
        (Some(here), Some(there)) => here.distance_to(&there),
        _ => f64::INFINITY,
    };

    let mut visited = HashSet::from([start.clone()]);
    let mut stations = vec![start.clone()];
    let mut current = start.clone();
    let mut steps = 0;

    while &current != end && steps < step_limit {
        steps += 1;

        let next = provider
            .neighbor_ids(&current)
            .into_iter()
            .filter(|n| !visited.contains(n))
            .map(|n| {
                let d = distance_to_target(&n);
                (n, d)
            })
            .min_by(|(_, a), (_, b)| a.total_cmp(b));

        let Some((next, _)) = next else {
            debug!(station = %current, steps, "greedy route hit a dead end");
            return None;
        };

        visited.insert(next.clone());
        stations.push(next.clone());
        current = next;
    }

    if &current != end {
        debug!(start = %start, end = %end, step_limit, "greedy route gave up");
        return None;
    }

    Some(Path::from_simple(stations))
}
