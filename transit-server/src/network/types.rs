//! Serialized network data.
//!
//! These types mirror the on-disk JSON exactly and are not validated;
//! [`TransitNetwork`](super::TransitNetwork) converts them into domain types.

use serde::{Deserialize, Serialize};

/// Top-level network file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NetworkFile {
    pub stations: Vec<StationRecord>,
    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
}

/// A station as stored in the network file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    pub id: String,
    pub name: String,
    pub line: Option<String>,
    #[serde(default)]
    pub accessible: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Interest score used by the time-budget optimizer.
    pub interest: Option<u32>,
    /// Minutes spent visiting the station, used by the optimizer.
    pub visit_time: Option<u32>,
}

/// An undirected connection as stored in the network file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectionRecord {
    pub from: String,
    pub to: String,
    /// Travel time in minutes; unit cost when absent.
    pub time: Option<u32>,
    pub line: Option<String>,
}
