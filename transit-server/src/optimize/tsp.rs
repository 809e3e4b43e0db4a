//! Exact round-trip ordering over a handful of stations.
//!
//! The search is a depth-first branch-and-bound over permutations with a
//! cheapest-outgoing-edge lower bound. Worst case is factorial in the number
//! of stations; it is meant for a hand-picked subset, not the whole network.

use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::{DomainError, StationId};
use crate::graph::{NeighborProvider, dijkstra_times_from};

/// Square matrix of travel costs between members of a station subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    size: usize,
    costs: Vec<u64>,
}

impl CostMatrix {
    /// Build from rows, rejecting non-square input.
    pub fn new(rows: Vec<Vec<u64>>) -> Result<Self, DomainError> {
        let size = rows.len();
        let mut costs = Vec::with_capacity(size * size);

        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != size {
                return Err(DomainError::NonSquareMatrix {
                    row,
                    len: entries.len(),
                    expected: size,
                });
            }
            costs.extend(entries);
        }

        Ok(Self { size, costs })
    }

    /// Number of stations covered.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cost of travelling from subset member `from` to member `to`.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.costs[from * self.size + to]
    }
}

/// Error raised while building a cost matrix when some pair of subset
/// members is not connected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no route from {from} to {to}")]
pub struct UnreachableLeg {
    pub from: StationId,
    pub to: StationId,
}

/// Build the all-pairs minimum travel time matrix for `stations`, running
/// Dijkstra once from each member.
///
/// Aborts on the first pair with no connecting route.
pub fn build_cost_matrix<P>(provider: &P, stations: &[StationId]) -> Result<CostMatrix, UnreachableLeg>
where
    P: NeighborProvider + ?Sized,
{
    let mut rows = Vec::with_capacity(stations.len());

    for from in stations {
        let times = dijkstra_times_from(provider, from);
        let row = stations
            .iter()
            .map(|to| {
                if from == to {
                    return Ok(0);
                }
                times.get(to).copied().ok_or_else(|| UnreachableLeg {
                    from: from.clone(),
                    to: to.clone(),
                })
            })
            .collect::<Result<Vec<u64>, _>>()?;
        rows.push(row);
    }

    let size = rows.len();
    Ok(CostMatrix {
        size,
        costs: rows.into_iter().flatten().collect(),
    })
}

/// A closed tour over matrix indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tour {
    /// Visiting order; starts and ends at index 0.
    pub order: Vec<usize>,
    /// Total cost including the return leg.
    pub cost: u64,
}

/// Find the cheapest tour that starts at index 0, visits every other index
/// exactly once and returns to 0.
///
/// Returns `None` only for an empty matrix. A single station yields the
/// trivial tour `[0, 0]`.
pub fn solve_tsp(matrix: &CostMatrix) -> Option<Tour> {
    let n = matrix.size();
    if n == 0 {
        return None;
    }

    let mut search = BranchAndBound::new(matrix);
    search.branch(0, 0);

    debug!(
        stations = n,
        nodes = search.nodes,
        pruned = search.pruned,
        cost = search.best_cost,
        "TSP branch-and-bound complete"
    );

    let mut order = search.best_path?;
    order.push(0);
    Some(Tour {
        order,
        cost: search.best_cost,
    })
}

struct BranchAndBound<'a> {
    matrix: &'a CostMatrix,
    /// Cheapest edge leaving each index; a lower bound on its outgoing leg.
    min_outgoing: Vec<u64>,
    visited: Vec<bool>,
    path: Vec<usize>,
    best_cost: u64,
    best_path: Option<Vec<usize>>,
    nodes: usize,
    pruned: usize,
}

impl<'a> BranchAndBound<'a> {
    fn new(matrix: &'a CostMatrix) -> Self {
        let n = matrix.size();
        let min_outgoing = (0..n)
            .map(|i| {
                (0..n)
                    .filter(|&j| j != i)
                    .map(|j| matrix.get(i, j))
                    .min()
                    .unwrap_or(u64::MAX)
            })
            .collect();

        let mut visited = vec![false; n];
        visited[0] = true;

        Self {
            matrix,
            min_outgoing,
            visited,
            path: vec![0],
            best_cost: u64::MAX,
            best_path: None,
            nodes: 0,
            pruned: 0,
        }
    }

    fn branch(&mut self, last: usize, cost: u64) {
        self.nodes += 1;
        let n = self.matrix.size();

        if self.path.len() == n {
            let total = cost.saturating_add(self.matrix.get(last, 0));
            if total < self.best_cost {
                trace!(total, path = ?self.path, "TSP improved incumbent");
                self.best_cost = total;
                self.best_path = Some(self.path.clone());
            }
            return;
        }

        let bound = (0..n)
            .filter(|&i| !self.visited[i])
            .fold(cost.saturating_add(self.min_outgoing[last]), |acc, i| {
                acc.saturating_add(self.min_outgoing[i])
            });
        if bound >= self.best_cost {
            self.pruned += 1;
            return;
        }

        for next in 0..n {
            if self.visited[next] {
                continue;
            }
            let next_cost = cost.saturating_add(self.matrix.get(last, next));
            if next_cost >= self.best_cost {
                self.pruned += 1;
                continue;
            }

            self.visited[next] = true;
            self.path.push(next);
            self.branch(next, next_cost);
            self.path.pop();
            self.visited[next] = false;
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn matrix_strategy() -> impl Strategy<Value = CostMatrix> {
        (1usize..=7).prop_flat_map(|n| {
            proptest::collection::vec(proptest::collection::vec(1u64..=50, n), n).prop_map(|mut rows| {
                for (i, row) in rows.iter_mut().enumerate() {
                    row[i] = 0;
                }
                CostMatrix::new(rows).unwrap()
            })
        })
    }

    /// Cheapest closed tour from 0 over all permutations of the rest.
    fn brute_force(m: &CostMatrix) -> u64 {
        fn permute(m: &CostMatrix, last: usize, cost: u64, remaining: &mut Vec<usize>) -> u64 {
            if remaining.is_empty() {
                return cost + m.get(last, 0);
            }
            let mut best = u64::MAX;
            for i in 0..remaining.len() {
                let next = remaining.remove(i);
                best = best.min(permute(m, next, cost + m.get(last, next), remaining));
                remaining.insert(i, next);
            }
            best
        }
        let mut rest: Vec<usize> = (1..m.size()).collect();
        permute(m, 0, 0, &mut rest)
    }

    proptest! {
        /// The tour is a closed permutation and matches the brute-force optimum
        #[test]
        fn optimal_closed_tour(m in matrix_strategy()) {
            let tour = solve_tsp(&m).unwrap();
            let n = m.size();

            prop_assert_eq!(tour.order.len(), n + 1);
            prop_assert_eq!(tour.order[0], 0);
            prop_assert_eq!(tour.order[n], 0);

            let mut inner = tour.order[..n].to_vec();
            inner.sort_unstable();
            prop_assert_eq!(inner, (0..n).collect::<Vec<_>>());

            let cost: u64 = tour.order.windows(2).map(|w| m.get(w[0], w[1])).sum();
            prop_assert_eq!(cost, tour.cost);
            prop_assert_eq!(tour.cost, brute_force(&m));
        }
    }
}
