//! In-memory transit network loaded from a JSON file.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::path::Path as FsPath;

use tracing::{debug, info};

use crate::domain::{
    Coordinates, DomainError, Edge, Item, LineId, Station, StationId, TravelTime,
};
use crate::graph::{Neighbor, NeighborProvider};

use super::error::NetworkError;
use super::supplier::StationSupplier;
use super::types::{ConnectionRecord, NetworkFile, StationRecord};

/// Validated stations and connections, indexed for lookup.
///
/// Immutable once loaded; share it behind an `Arc` across requests.
#[derive(Debug, Clone, Default)]
pub struct TransitNetwork {
    stations: Vec<Station>,
    index: HashMap<StationId, usize>,
    edges: Vec<Edge>,
    /// Edge positions touching each station, in file order.
    incident: HashMap<StationId, Vec<usize>>,
    items: Vec<Item>,
}

impl TransitNetwork {
    /// Load and validate a network file.
    pub fn load(path: impl AsRef<FsPath>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let network = Self::from_json(&json)?;

        info!(
            path = %path.display(),
            stations = network.stations.len(),
            connections = network.edges.len(),
            "loaded transit network"
        );
        Ok(network)
    }

    /// Parse and validate network JSON.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        let file: NetworkFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// Validate already-deserialized records.
    pub fn from_file(file: NetworkFile) -> Result<Self, NetworkError> {
        let mut network = TransitNetwork::default();

        for (index, record) in file.stations.into_iter().enumerate() {
            let item = optimizer_item(&record);
            let station = station_from_record(record)
                .map_err(|source| NetworkError::InvalidStation { index, source })?;

            if network.index.contains_key(station.id()) {
                return Err(NetworkError::DuplicateStation(station.id().clone()));
            }

            if let Some((weight, value)) = item {
                network
                    .items
                    .push(Item::new(station.id().clone(), station.name(), weight, value));
            }
            network
                .index
                .insert(station.id().clone(), network.stations.len());
            network.stations.push(station);
        }

        for (index, record) in file.connections.into_iter().enumerate() {
            let edge = edge_from_record(record)
                .map_err(|source| NetworkError::MalformedConnection { index, source })?;

            for endpoint in [&edge.from, &edge.to] {
                if !network.index.contains_key(endpoint) {
                    return Err(NetworkError::UnknownStation {
                        index,
                        station: endpoint.clone(),
                    });
                }
            }

            let position = network.edges.len();
            network
                .incident
                .entry(edge.from.clone())
                .or_default()
                .push(position);
            if edge.to != edge.from {
                network
                    .incident
                    .entry(edge.to.clone())
                    .or_default()
                    .push(position);
            }
            network.edges.push(edge);
        }

        debug!(
            stations = network.stations.len(),
            connections = network.edges.len(),
            optimizer_items = network.items.len(),
            "validated network data"
        );
        Ok(network)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn connection_count(&self) -> usize {
        self.edges.len()
    }

    /// Stations whose home line is `line`, in file order.
    pub fn stations_on_line(&self, line: &LineId) -> Vec<Station> {
        self.stations
            .iter()
            .filter(|s| s.line() == Some(line))
            .cloned()
            .collect()
    }

    /// Every line named by a station, in first-seen order.
    pub fn lines(&self) -> Vec<LineId> {
        let mut seen = HashSet::new();
        self.stations
            .iter()
            .filter_map(Station::line)
            .filter(|line| seen.insert(*line))
            .cloned()
            .collect()
    }
}

fn station_from_record(record: StationRecord) -> Result<Station, DomainError> {
    let id = StationId::parse(&record.id)?;
    let line = record.line.as_deref().map(LineId::parse).transpose()?;
    let station = Station::new(id, record.name, line, record.accessible)?;

    Ok(match (record.latitude, record.longitude) {
        (Some(latitude), Some(longitude)) => {
            station.with_position(Coordinates::new(latitude, longitude))
        }
        _ => station,
    })
}

/// (weight, value) when the station carries both optimizer attributes.
fn optimizer_item(record: &StationRecord) -> Option<(u32, u32)> {
    Some((record.visit_time?, record.interest?))
}

fn edge_from_record(record: ConnectionRecord) -> Result<Edge, DomainError> {
    let mut edge = Edge::new(StationId::parse(&record.from)?, StationId::parse(&record.to)?);
    if let Some(minutes) = record.time {
        edge = edge.with_time(TravelTime::new(minutes)?);
    }
    if let Some(line) = record.line.as_deref() {
        edge = edge.on_line(LineId::parse(line)?);
    }
    Ok(edge)
}

impl NeighborProvider for TransitNetwork {
    fn contains(&self, station: &StationId) -> bool {
        self.index.contains_key(station)
    }

    fn neighbors(&self, station: &StationId) -> Cow<'_, [Neighbor]> {
        let Some(positions) = self.incident.get(station) else {
            return Cow::Owned(Vec::new());
        };

        let neighbors = positions
            .iter()
            .map(|&position| {
                let edge = &self.edges[position];
                let other = if &edge.from == station { &edge.to } else { &edge.from };
                Neighbor::new(other.clone(), edge.weight())
            })
            .collect();
        Cow::Owned(neighbors)
    }
}

impl StationSupplier for TransitNetwork {
    fn all_edges(&self) -> Vec<Edge> {
        self.edges.clone()
    }

    fn all_stations(&self) -> Vec<Station> {
        self.stations.clone()
    }

    fn station(&self, id: &StationId) -> Option<Station> {
        self.index.get(id).map(|&i| self.stations[i].clone())
    }

    fn resolve_id_by_name(&self, name: &str) -> Option<StationId> {
        self.stations
            .iter()
            .find(|s| s.name() == name)
            .map(|s| s.id().clone())
    }

    fn optimizer_items(&self) -> Vec<Item> {
        self.items.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn id(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    const SAMPLE: &str = r#"{
        "stations": [
            {"id": "A01", "name": "Plaza de Mayo", "line": "A", "accessible": true,
             "latitude": -34.6087, "longitude": -58.3719, "interest": 9, "visitTime": 30},
            {"id": "A02", "name": "Perú", "line": "A", "interest": 4},
            {"id": "A03", "name": "Piedras", "line": "A", "visitTime": 10},
            {"id": "E01", "name": "Bolívar", "line": "E", "interest": 6, "visitTime": 15},
            {"id": "X01", "name": "Perú", "line": "E"}
        ],
        "connections": [
            {"from": "A01", "to": "A02", "time": 2, "line": "A"},
            {"from": "A02", "to": "A03", "time": 3, "line": "A"},
            {"from": "A02", "to": "E01"}
        ]
    }"#;

    #[test]
    fn loads_sample() {
        let network = TransitNetwork::from_json(SAMPLE).unwrap();
        assert_eq!(network.station_count(), 5);
        assert_eq!(network.connection_count(), 3);

        let plaza = network.station(&id("A01")).unwrap();
        assert_eq!(plaza.name(), "Plaza de Mayo");
        assert!(plaza.is_accessible());
        assert!(plaza.position().is_some());
        assert!(network.station(&id("A02")).unwrap().position().is_none());
        assert!(network.station(&id("Z99")).is_none());
    }

    #[test]
    fn neighbors_are_undirected() {
        let network = TransitNetwork::from_json(SAMPLE).unwrap();

        let around_peru: Vec<_> = network
            .neighbors(&id("A02"))
            .iter()
            .map(|n| (n.station.as_str().to_string(), n.time.minutes()))
            .collect();
        assert_eq!(
            around_peru,
            vec![
                ("A01".to_string(), 2),
                ("A03".to_string(), 3),
                ("E01".to_string(), 1),
            ]
        );

        assert_eq!(network.neighbor_ids(&id("A03")), vec![id("A02")]);
        assert!(network.neighbors(&id("X01")).is_empty());
        assert!(network.neighbors(&id("Z99")).is_empty());
        assert!(network.contains(&id("X01")));
        assert!(!network.contains(&id("Z99")));
    }

    #[test]
    fn name_resolution_takes_first_match() {
        let network = TransitNetwork::from_json(SAMPLE).unwrap();
        assert_eq!(network.resolve_id_by_name("Perú"), Some(id("A02")));
        assert_eq!(network.resolve_id_by_name("Bolívar"), Some(id("E01")));
        assert_eq!(network.resolve_id_by_name("Nowhere"), None);
    }

    #[test]
    fn optimizer_items_need_both_attributes() {
        let network = TransitNetwork::from_json(SAMPLE).unwrap();
        let items = network.optimizer_items();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Item::new(id("A01"), "Plaza de Mayo", 30, 9));
        assert_eq!(items[1], Item::new(id("E01"), "Bolívar", 15, 6));
    }

    #[test]
    fn lines_in_first_seen_order() {
        let network = TransitNetwork::from_json(SAMPLE).unwrap();
        let lines: Vec<_> = network.lines().iter().map(|l| l.as_str().to_string()).collect();
        assert_eq!(lines, vec!["A", "E"]);

        let on_e = network.stations_on_line(&LineId::parse("E").unwrap());
        let ids: Vec<_> = on_e.iter().map(|s| s.id().as_str()).collect();
        assert_eq!(ids, vec!["E01", "X01"]);
    }

    #[test]
    fn rejects_duplicate_station() {
        let json = r#"{"stations": [
            {"id": "A01", "name": "One"},
            {"id": " A01 ", "name": "Two"}
        ]}"#;
        let err = TransitNetwork::from_json(json).unwrap_err();
        assert!(matches!(err, NetworkError::DuplicateStation(ref s) if s.as_str() == "A01"));
    }

    #[test]
    fn rejects_blank_station_fields() {
        let blank_id = r#"{"stations": [{"id": "  ", "name": "One"}]}"#;
        assert!(matches!(
            TransitNetwork::from_json(blank_id),
            Err(NetworkError::InvalidStation { index: 0, .. })
        ));

        let blank_name = r#"{"stations": [{"id": "A01", "name": "ok"}, {"id": "A02", "name": ""}]}"#;
        assert!(matches!(
            TransitNetwork::from_json(blank_name),
            Err(NetworkError::InvalidStation {
                index: 1,
                source: DomainError::BlankStationName(_)
            })
        ));
    }

    #[test]
    fn rejects_malformed_connections() {
        let zero_time = r#"{
            "stations": [{"id": "A", "name": "A"}, {"id": "B", "name": "B"}],
            "connections": [{"from": "A", "to": "B", "time": 0}]
        }"#;
        assert!(matches!(
            TransitNetwork::from_json(zero_time),
            Err(NetworkError::MalformedConnection {
                index: 0,
                source: DomainError::InvalidTravelTime(_)
            })
        ));

        let blank_endpoint = r#"{
            "stations": [{"id": "A", "name": "A"}],
            "connections": [{"from": "A", "to": ""}]
        }"#;
        assert!(matches!(
            TransitNetwork::from_json(blank_endpoint),
            Err(NetworkError::MalformedConnection { index: 0, .. })
        ));

        let unknown = r#"{
            "stations": [{"id": "A", "name": "A"}],
            "connections": [{"from": "A", "to": "Q"}]
        }"#;
        assert!(matches!(
            TransitNetwork::from_json(unknown),
            Err(NetworkError::UnknownStation { index: 0, ref station }) if station.as_str() == "Q"
        ));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            TransitNetwork::from_json("{not json"),
            Err(NetworkError::Json(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let network = TransitNetwork::load(file.path()).unwrap();
        assert_eq!(network.station_count(), 5);
    }

    #[test]
    fn bundled_network_is_valid() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/network.json");
        let network = TransitNetwork::load(path).unwrap();

        assert_eq!(network.station_count(), 24);
        assert_eq!(network.connection_count(), 25);
        assert_eq!(network.lines().len(), 4);
        // two stations are named Callao; the line B one comes first
        assert_eq!(network.resolve_id_by_name("Callao"), Some(id("B05")));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");

        let err = TransitNetwork::load(&missing).unwrap_err();
        assert!(matches!(err, NetworkError::Io { ref path, .. } if path == &missing));
    }
}
