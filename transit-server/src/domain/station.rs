//! Station identity and station records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::line::LineId;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// An opaque, non-blank station identifier.
///
/// This is the sole join key between the graph structure and every
/// attribute lookup, so it is validated once at construction and trusted
/// everywhere else.
///
/// # Examples
///
/// ```
/// use transit_server::domain::StationId;
///
/// let id = StationId::parse("A01").unwrap();
/// assert_eq!(id.as_str(), "A01");
///
/// // Blank identifiers are rejected
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier, rejecting blank input.
    ///
    /// Surrounding whitespace is trimmed.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be blank",
            });
        }
        Ok(StationId(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationId {
    type Error = InvalidStationId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        StationId::parse(&value)
    }
}

impl From<StationId> for String {
    fn from(id: StationId) -> Self {
        id.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Mean Earth radius in metres.
    const EARTH_RADIUS_M: f64 = 6_371_000.0;

    /// Create a new coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in metres (haversine formula).
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * Self::EARTH_RADIUS_M * a.sqrt().asin()
    }
}

/// A station in the transit network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    id: StationId,
    name: String,
    line: Option<LineId>,
    accessible: bool,
    position: Option<Coordinates>,
}

impl Station {
    /// Create a station. The display name must not be blank.
    pub fn new(
        id: StationId,
        name: impl Into<String>,
        line: Option<LineId>,
        accessible: bool,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::BlankStationName(id));
        }
        Ok(Self {
            id,
            name,
            line,
            accessible,
            position: None,
        })
    }

    /// Attach a geographic position.
    pub fn with_position(mut self, position: Coordinates) -> Self {
        self.position = Some(position);
        self
    }

    pub fn id(&self) -> &StationId {
        &self.id
    }

    /// Human-readable label. Not guaranteed unique across the network.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line(&self) -> Option<&LineId> {
        self.line.as_ref()
    }

    pub fn is_accessible(&self) -> bool {
        self.accessible
    }

    pub fn position(&self) -> Option<&Coordinates> {
        self.position.as_ref()
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
