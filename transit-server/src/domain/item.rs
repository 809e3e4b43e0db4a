//! Items for the subset optimizer.

use serde::Serialize;

use super::station::StationId;

/// A station considered by the time-budget optimizer.
///
/// `weight` is the time spent visiting the station and `value` its interest
/// score. Zero-weight items are allowed and contribute value for free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub station: StationId,
    pub name: String,
    pub weight: u32,
    pub value: u32,
}

impl Item {
    pub fn new(station: StationId, name: impl Into<String>, weight: u32, value: u32) -> Self {
        Self {
            station,
            name: name.into(),
            weight,
            value,
        }
    }
}
