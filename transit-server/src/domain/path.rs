//! Simple paths through the network.

use std::collections::HashSet;

use serde::Serialize;

use super::error::DomainError;
use super::station::StationId;

/// An ordered, non-empty sequence of stations with no repeats.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<StationId>);

impl Path {
    /// Create a path, validating that it is non-empty and simple.
    pub fn new(stations: Vec<StationId>) -> Result<Self, DomainError> {
        if stations.is_empty() {
            return Err(DomainError::EmptyPath);
        }
        let mut seen = HashSet::with_capacity(stations.len());
        for station in &stations {
            if !seen.insert(station) {
                return Err(DomainError::RepeatedStation(station.clone()));
            }
        }
        Ok(Path(stations))
    }

    /// Wrap a sequence the caller has built as a simple path.
    pub(crate) fn from_simple(stations: Vec<StationId>) -> Self {
        debug_assert!(!stations.is_empty(), "path must not be empty");
        Path(stations)
    }

    pub fn stations(&self) -> &[StationId] {
        &self.0
    }

    /// Number of stations on the path (always at least 1).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.0.len() - 1
    }

    pub fn first(&self) -> &StationId {
        &self.0[0]
    }

    pub fn last(&self) -> &StationId {
        &self.0[self.0.len() - 1]
    }
}
