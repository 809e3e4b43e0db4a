//! Depth-first reachability and simple-path enumeration.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{Path, StationId};

use super::adjacency::AdjacencyGraph;

/// Depth bound (in edges) used when the caller does not supply one.
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// Check whether `end` can be reached from `start`.
///
/// Returns `false` if either station is absent from the graph; that is a
/// normal answer, not an error. O(V + E) time, O(V) extra space.
pub fn exists_path(graph: &AdjacencyGraph, start: &StationId, end: &StationId) -> bool {
    if !graph.contains(start) || !graph.contains(end) {
        return false;
    }
    if start == end {
        return true;
    }

    let mut visited: HashSet<&StationId> = HashSet::from([start]);
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        for neighbor in graph.adjacent(current) {
            if &neighbor.station == end {
                return true;
            }
            if visited.insert(&neighbor.station) {
                stack.push(&neighbor.station);
            }
        }
    }

    false
}

/// Enumerate every simple path from `start` to `end` of at most
/// `max_depth` edges.
///
/// Results are in discovery order with exact duplicates removed (duplicate
/// neighbour entries in the graph would otherwise produce the same path
/// more than once). The running time is combinatorial in graph density;
/// `max_depth` is the only bound on the work done.
pub fn all_simple_paths(
    graph: &AdjacencyGraph,
    start: &StationId,
    end: &StationId,
    max_depth: usize,
) -> Vec<Path> {
    if !graph.contains(start) || !graph.contains(end) {
        return Vec::new();
    }

    let mut search = PathEnumeration::new(graph, end, max_depth);
    search.backtrack(start);

    let found = search.found.len();
    let paths = dedup_preserving_order(search.found);

    debug!(
        start = %start,
        end = %end,
        max_depth,
        found,
        unique = paths.len(),
        "simple path enumeration complete"
    );

    paths
}

/// Backtracking state shared across recursive calls.
///
/// Invariant: `backtrack` leaves `visited` and `current` exactly as it
/// found them, whether or not it reached the target.
struct PathEnumeration<'a> {
    graph: &'a AdjacencyGraph,
    target: &'a StationId,
    max_depth: usize,
    visited: HashSet<&'a StationId>,
    current: Vec<&'a StationId>,
    found: Vec<Path>,
}

impl<'a> PathEnumeration<'a> {
    fn new(graph: &'a AdjacencyGraph, target: &'a StationId, max_depth: usize) -> Self {
        Self {
            graph,
            target,
            max_depth,
            visited: HashSet::new(),
            current: Vec::new(),
            found: Vec::new(),
        }
    }

    fn backtrack(&mut self, station: &'a StationId) {
        self.visited.insert(station);
        self.current.push(station);

        if station == self.target {
            let stations = self.current.iter().map(|s| (*s).clone()).collect();
            self.found.push(Path::from_simple(stations));
        } else if self.current.len() <= self.max_depth {
            // current.len() - 1 edges walked so far, so one more is allowed
            let graph = self.graph;
            for neighbor in graph.adjacent(station) {
                if !self.visited.contains(&neighbor.station) {
                    self.backtrack(&neighbor.station);
                }
            }
        }

        self.current.pop();
        self.visited.remove(station);
    }
}

/// Remove repeated paths, keeping the first occurrence of each.
fn dedup_preserving_order(paths: Vec<Path>) -> Vec<Path> {
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(paths.len());
        paths.iter().map(|p| seen.insert(p)).collect()
    };

    paths
        .into_iter()
        .zip(keep)
        .filter_map(|(path, first)| first.then_some(path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Edge;

    fn id(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn graph(edges: &[(&str, &str)]) -> AdjacencyGraph {
        edges
            .iter()
            .map(|(a, b)| Edge::new(id(a), id(b)))
            .collect()
    }

    fn names(path: &Path) -> Vec<&str> {
        path.stations().iter().map(StationId::as_str).collect()
    }

    /// A - B - C - D - A
    fn ring() -> AdjacencyGraph {
        graph(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")])
    }

    #[test]
    fn exists_in_connected_graph() {
        let g = ring();
        assert!(exists_path(&g, &id("A"), &id("C")));
        assert!(exists_path(&g, &id("C"), &id("A")));
    }

    #[test]
    fn exists_trivially_for_same_station() {
        assert!(exists_path(&ring(), &id("B"), &id("B")));
    }

    #[test]
    fn no_path_between_components() {
        let g = graph(&[("A", "B"), ("C", "D")]);
        assert!(!exists_path(&g, &id("A"), &id("D")));
    }

    #[test]
    fn absent_endpoints_are_unreachable() {
        let g = ring();
        assert!(!exists_path(&g, &id("A"), &id("Z")));
        assert!(!exists_path(&g, &id("Z"), &id("A")));
        assert!(!exists_path(&g, &id("Z"), &id("Z")));
    }

    #[test]
    fn ring_has_two_simple_paths() {
        let paths = all_simple_paths(&ring(), &id("A"), &id("C"), DEFAULT_MAX_DEPTH);

        assert_eq!(paths.len(), 2);
        let listed: Vec<_> = paths.iter().map(names).collect();
        assert!(listed.contains(&vec!["A", "B", "C"]));
        assert!(listed.contains(&vec!["A", "D", "C"]));
    }

    #[test]
    fn enumeration_follows_neighbor_order() {
        let paths = all_simple_paths(&ring(), &id("A"), &id("C"), DEFAULT_MAX_DEPTH);
        // A's neighbours were inserted as B then D
        assert_eq!(names(&paths[0]), vec!["A", "B", "C"]);
        assert_eq!(names(&paths[1]), vec!["A", "D", "C"]);
    }

    #[test]
    fn depth_bound_excludes_longer_paths() {
        // A - B - C and A - X - Y - C
        let g = graph(&[("A", "B"), ("B", "C"), ("A", "X"), ("X", "Y"), ("Y", "C")]);

        let shallow = all_simple_paths(&g, &id("A"), &id("C"), 2);
        assert_eq!(shallow.len(), 1);
        assert_eq!(names(&shallow[0]), vec!["A", "B", "C"]);

        let deep = all_simple_paths(&g, &id("A"), &id("C"), 3);
        assert_eq!(deep.len(), 2);
        assert!(deep.iter().all(|p| p.hops() <= 3));
    }

    #[test]
    fn zero_depth_only_matches_start() {
        let g = ring();
        assert!(all_simple_paths(&g, &id("A"), &id("B"), 0).is_empty());

        let same = all_simple_paths(&g, &id("A"), &id("A"), 0);
        assert_eq!(same.len(), 1);
        assert_eq!(names(&same[0]), vec!["A"]);
    }

    #[test]
    fn duplicate_edges_yield_unique_paths() {
        // the supplier may report a connection once per direction
        let g = graph(&[("A", "B"), ("B", "A"), ("B", "C"), ("C", "B")]);

        let paths = all_simple_paths(&g, &id("A"), &id("C"), DEFAULT_MAX_DEPTH);
        assert_eq!(paths.len(), 1);
        assert_eq!(names(&paths[0]), vec!["A", "B", "C"]);
    }

    #[test]
    fn absent_endpoints_give_no_paths() {
        let g = ring();
        assert!(all_simple_paths(&g, &id("A"), &id("Z"), 5).is_empty());
        assert!(all_simple_paths(&g, &id("Z"), &id("A"), 5).is_empty());
    }

    #[test]
    fn backtracking_restores_shared_state() {
        let g = graph(&[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D"), ("B", "D")]);
        let target = id("D");
        let start = id("A");

        let mut search = PathEnumeration::new(&g, &target, DEFAULT_MAX_DEPTH);
        search.backtrack(&start);

        assert!(search.visited.is_empty());
        assert!(search.current.is_empty());
        // A-B-D, A-B-C-D, A-C-D, A-C-B-D
        assert_eq!(search.found.len(), 4);
    }

    #[test]
    fn dedup_keeps_first_seen_order() {
        let p = |s: &[&str]| Path::new(s.iter().map(|x| id(x)).collect()).unwrap();
        let deduped = dedup_preserving_order(vec![
            p(&["A", "C"]),
            p(&["A", "B", "C"]),
            p(&["A", "C"]),
        ]);
        assert_eq!(deduped, vec![p(&["A", "C"]), p(&["A", "B", "C"])]);
    }
}
