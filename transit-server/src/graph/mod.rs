//! Graph algorithms over the transit network.
//!
//! Every call works on its own immutable view of the network: either an
//! [`AdjacencyGraph`] built from the supplier's edge list for the duration of
//! one request, or the supplier itself through [`NeighborProvider`]. No state
//! is shared between calls, so all of these functions are safe to run from
//! concurrent requests without locking.

mod adjacency;
mod greedy;
mod provider;
mod reach;
mod shortest;

#[cfg(test)]
mod properties;

pub use adjacency::AdjacencyGraph;
pub use greedy::greedy_route;
pub use provider::{Neighbor, NeighborProvider};
pub use reach::{DEFAULT_MAX_DEPTH, all_simple_paths, exists_path};
pub use shortest::{WeightedPath, bfs_shortest_hops, dijkstra_shortest_path, dijkstra_times_from};
