//! Neighbour lookup abstraction.

use std::borrow::Cow;

use crate::domain::{StationId, TravelTime};

/// A station adjacent to another, with the time to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    pub station: StationId,
    pub time: TravelTime,
}

impl Neighbor {
    pub fn new(station: StationId, time: TravelTime) -> Self {
        Self { station, time }
    }
}

/// Trait for anything that can answer "who is next to this station?".
///
/// Implemented by the pre-built [`AdjacencyGraph`](super::AdjacencyGraph)
/// (O(1) borrowed lookups) and by the data supplier, where every call is a
/// query that returns owned data. Search algorithms depend only on this
/// trait, so both can be used interchangeably and tests can substitute
/// their own doubles.
pub trait NeighborProvider {
    /// Whether the station is known to this provider.
    fn contains(&self, station: &StationId) -> bool;

    /// Weighted neighbours of a station, in a stable enumeration order.
    ///
    /// Unknown stations yield an empty list.
    fn neighbors(&self, station: &StationId) -> Cow<'_, [Neighbor]>;

    /// Neighbour identifiers, ignoring weights.
    fn neighbor_ids(&self, station: &StationId) -> Vec<StationId> {
        self.neighbors(station)
            .iter()
            .map(|n| n.station.clone())
            .collect()
    }
}
