//! Combinatorial optimization over stations.
//!
//! Subset selection under a time budget, exact round-trip ordering over a
//! small station subset, and the stable name ordering used for listings.

mod knapsack;
mod sort;
mod tsp;

pub use knapsack::{Selection, maximize_value};
pub use sort::sort_by_name;
pub use tsp::{CostMatrix, Tour, UnreachableLeg, build_cost_matrix, solve_tsp};
