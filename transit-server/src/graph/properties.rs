//! Cross-checks between the graph algorithms on small random graphs.
//!
//! Exhaustive enumeration serves as the brute-force oracle for BFS and
//! Dijkstra, so graphs are kept to at most 8 stations.

use proptest::prelude::*;

use super::*;
use crate::domain::{Edge, Path, StationId, TravelTime};

fn station(i: usize) -> StationId {
    StationId::parse(&format!("S{i}")).unwrap()
}

/// (station count, edges as (from, to, minutes)).
fn small_network() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (1usize..=8).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 1u32..=10);
        (Just(n), proptest::collection::vec(edge, 0..=14))
    })
}

fn build(edges: &[(usize, usize, u32)]) -> AdjacencyGraph {
    edges
        .iter()
        .filter(|(a, b, _)| a != b)
        .map(|&(a, b, t)| Edge::new(station(a), station(b)).with_time(TravelTime::new(t).unwrap()))
        .collect()
}

/// Summed weight of a path, using the cheapest of any parallel connections.
fn path_cost(graph: &AdjacencyGraph, path: &Path) -> u64 {
    path.stations()
        .windows(2)
        .map(|pair| {
            graph
                .adjacent(&pair[0])
                .iter()
                .filter(|n| n.station == pair[1])
                .map(|n| u64::from(n.time.minutes()))
                .min()
                .expect("consecutive stations must be adjacent")
        })
        .sum()
}

proptest! {
    /// Reachability and BFS agree on whether a route exists
    #[test]
    fn exists_iff_bfs_finds_path((n, edges) in small_network(), u in 0usize..8, v in 0usize..8) {
        let graph = build(&edges);
        let (u, v) = (station(u % n), station(v % n));

        let exists = exists_path(&graph, &u, &v);
        let bfs = bfs_shortest_hops(&graph, &u, &v);
        prop_assert_eq!(exists, bfs.is_some());
    }

    /// No enumerated path is shorter (in hops) than the BFS answer
    #[test]
    fn bfs_is_never_beaten_on_hops((n, edges) in small_network(), u in 0usize..8, v in 0usize..8) {
        let graph = build(&edges);
        let (u, v) = (station(u % n), station(v % n));

        let all = all_simple_paths(&graph, &u, &v, n);
        match bfs_shortest_hops(&graph, &u, &v) {
            Some(best) => {
                prop_assert!(!all.is_empty());
                for path in &all {
                    prop_assert!(best.hops() <= path.hops());
                }
                prop_assert_eq!(best.first(), &u);
                prop_assert_eq!(best.last(), &v);
            }
            None => prop_assert!(all.is_empty()),
        }
    }

    /// Dijkstra's cost matches the cheapest enumerated path
    #[test]
    fn dijkstra_matches_brute_force((n, edges) in small_network(), u in 0usize..8, v in 0usize..8) {
        let graph = build(&edges);
        let (u, v) = (station(u % n), station(v % n));

        let brute = all_simple_paths(&graph, &u, &v, n)
            .iter()
            .map(|p| path_cost(&graph, p))
            .min();

        match dijkstra_shortest_path(&graph, &u, &v) {
            Some(found) => {
                prop_assert_eq!(Some(found.cost), brute);
                prop_assert_eq!(path_cost(&graph, &found.path), found.cost);
                let times = dijkstra_times_from(&graph, &u);
                prop_assert_eq!(times.get(&v).copied(), Some(found.cost));
            }
            None => prop_assert_eq!(brute, None),
        }
    }

    /// Enumeration never reports the same station sequence twice
    #[test]
    fn enumeration_has_no_duplicates((n, edges) in small_network(), u in 0usize..8, v in 0usize..8) {
        // doubling every edge forces duplicate traversals
        let doubled: Vec<_> = edges.iter().chain(edges.iter()).copied().collect();
        let graph = build(&doubled);
        let (u, v) = (station(u % n), station(v % n));

        let all = all_simple_paths(&graph, &u, &v, n);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
    }

    /// Graph construction is symmetric
    #[test]
    fn adjacency_is_symmetric((_n, edges) in small_network()) {
        let graph = build(&edges);
        for a in graph.stations() {
            for neighbor in graph.adjacent(a) {
                prop_assert!(graph.adjacent(&neighbor.station).iter().any(|back| &back.station == a));
            }
        }
    }
}
