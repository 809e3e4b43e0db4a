//! Adjacency graph built from a flat edge list.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::domain::{Edge, StationId};

use super::provider::{Neighbor, NeighborProvider};

/// Undirected adjacency view of the network.
///
/// Built once per query from the supplier's edge list and never mutated
/// afterwards. Every edge is inserted in both directions, so if `b` is a
/// neighbour of `a` then `a` is a neighbour of `b`. Duplicate input edges
/// are kept as duplicate neighbour entries.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    adjacency: HashMap<StationId, Vec<Neighbor>>,
}

impl AdjacencyGraph {
    /// Build a graph from undirected edges.
    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut adjacency: HashMap<StationId, Vec<Neighbor>> = HashMap::new();

        for edge in edges {
            let weight = edge.weight();
            adjacency
                .entry(edge.from.clone())
                .or_default()
                .push(Neighbor::new(edge.to.clone(), weight));
            adjacency
                .entry(edge.to)
                .or_default()
                .push(Neighbor::new(edge.from, weight));
        }

        Self { adjacency }
    }

    /// Neighbours of a station, empty if the station is unknown.
    pub fn adjacent(&self, station: &StationId) -> &[Neighbor] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, station: &StationId) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Number of stations with at least one connection.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected connections (each stored twice internally).
    pub fn connection_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn stations(&self) -> impl Iterator<Item = &StationId> {
        self.adjacency.keys()
    }
}

impl FromIterator<Edge> for AdjacencyGraph {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl NeighborProvider for AdjacencyGraph {
    fn contains(&self, station: &StationId) -> bool {
        AdjacencyGraph::contains(self, station)
    }

    fn neighbors(&self, station: &StationId) -> Cow<'_, [Neighbor]> {
        Cow::Borrowed(self.adjacent(station))
    }
}
