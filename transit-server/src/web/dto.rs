//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Item, Station};
use crate::optimize::Selection;
use crate::planner::Route;

/// Query for routes addressed by station id.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Origin station id
    pub from: String,

    /// Destination station id
    pub to: String,
}

/// Query for simple-path enumeration.
#[derive(Debug, Default, Deserialize)]
pub struct AllPathsQuery {
    /// Maximum path length in edges (server default when omitted)
    #[serde(rename = "maxDepth")]
    pub max_depth: Option<usize>,
}

/// Request for an optimal round trip.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourRequest {
    /// Stations to visit; the first is the start and end of the tour
    pub station_ids: Vec<String>,
}

/// A station in responses.
#[derive(Debug, Serialize)]
pub struct StationView {
    pub id: String,
    pub name: String,
    pub line: Option<String>,
    pub accessible: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl StationView {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id().to_string(),
            name: station.name().to_string(),
            line: station.line().map(|l| l.to_string()),
            accessible: station.is_accessible(),
            latitude: station.position().map(|p| p.latitude),
            longitude: station.position().map(|p| p.longitude),
        }
    }
}

fn views(stations: &[Station]) -> Vec<StationView> {
    stations.iter().map(StationView::from_station).collect()
}

/// A list of stations.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationView>,
}

impl StationsResponse {
    pub fn from_stations(stations: &[Station]) -> Self {
        Self {
            stations: views(stations),
        }
    }
}

/// A single route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    pub stations: Vec<StationView>,

    /// Number of connections travelled
    pub hops: usize,

    /// Total travel time, for time-weighted searches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_minutes: Option<u64>,
}

impl RouteResponse {
    pub fn from_route(route: &Route) -> Self {
        Self {
            stations: views(&route.stations),
            hops: route.hops,
            total_minutes: route.total_minutes,
        }
    }
}

/// Every simple path between two stations.
#[derive(Debug, Serialize)]
pub struct PathsResponse {
    pub count: usize,
    pub paths: Vec<Vec<StationView>>,
}

impl PathsResponse {
    pub fn from_paths(paths: &[Vec<Station>]) -> Self {
        Self {
            count: paths.len(),
            paths: paths.iter().map(|p| views(p)).collect(),
        }
    }
}

/// Reachability answer.
#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

/// Known line names.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<String>,
}

/// A station chosen by the time-budget optimizer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitView {
    pub id: String,
    pub name: String,
    pub visit_time: u32,
    pub interest: u32,
}

impl VisitView {
    fn from_item(item: &Item) -> Self {
        Self {
            id: item.station.to_string(),
            name: item.name.clone(),
            visit_time: item.weight,
            interest: item.value,
        }
    }
}

/// Result of the time-budget optimizer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnapsackResponse {
    pub stations: Vec<VisitView>,
    pub total_time: u64,
    pub total_interest: u64,
}

impl KnapsackResponse {
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            stations: selection.items.iter().map(VisitView::from_item).collect(),
            total_time: selection.total_weight,
            total_interest: selection.total_value,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
