//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from data-supplier (IO/parse) errors.

use super::{InvalidLineId, InvalidStationId, InvalidTravelTime, StationId};

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error(transparent)]
    InvalidStationId(#[from] InvalidStationId),

    #[error(transparent)]
    InvalidLineId(#[from] InvalidLineId),

    #[error(transparent)]
    InvalidTravelTime(#[from] InvalidTravelTime),

    /// Station display name is blank
    #[error("station {0} has a blank name")]
    BlankStationName(StationId),

    /// Path has no stations
    #[error("path must contain at least one station")]
    EmptyPath,

    /// Path visits a station twice
    #[error("path visits station {0} more than once")]
    RepeatedStation(StationId),

    /// Optimizer budget below zero
    #[error("time budget must not be negative (got {0})")]
    NegativeCapacity(i64),

    /// Cost matrix rows differ in length from the row count
    #[error("cost matrix must be square: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
}
