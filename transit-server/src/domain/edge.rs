//! Connections between stations.

use std::fmt;

use serde::Serialize;

use super::line::LineId;
use super::station::StationId;

/// Error returned when a travel time is not strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("travel time must be greater than 0 minutes")]
pub struct InvalidTravelTime;

/// Time to traverse a connection, in whole minutes.
///
/// Always strictly positive: shortest-path search relies on non-negative
/// weights, and a zero weight would make distinct stations indistinguishable
/// by cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TravelTime(u32);

impl TravelTime {
    /// Weight used when a connection carries no explicit time.
    pub const UNIT: TravelTime = TravelTime(1);

    /// Create a travel time, rejecting zero.
    pub fn new(minutes: u32) -> Result<Self, InvalidTravelTime> {
        if minutes == 0 {
            return Err(InvalidTravelTime);
        }
        Ok(TravelTime(minutes))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

/// An undirected connection between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: StationId,
    pub to: StationId,
    pub time: Option<TravelTime>,
    pub line: Option<LineId>,
}

impl Edge {
    /// Create an untimed, untagged connection.
    pub fn new(from: StationId, to: StationId) -> Self {
        Self {
            from,
            to,
            time: None,
            line: None,
        }
    }

    /// Set the traversal time.
    pub fn with_time(mut self, time: TravelTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Tag the connection with the line serving it.
    pub fn on_line(mut self, line: LineId) -> Self {
        self.line = Some(line);
        self
    }

    /// Traversal weight: the explicit time, or unit cost when absent.
    pub fn weight(&self) -> TravelTime {
        self.time.unwrap_or(TravelTime::UNIT)
    }
}
