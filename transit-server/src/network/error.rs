//! Network data error types.

use std::path::PathBuf;

use crate::domain::{DomainError, StationId};

/// Errors raised while loading network data.
///
/// Any malformed record is reported here, at load time, so the graph
/// algorithms only ever see validated data.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Network file could not be read
    #[error("failed to read network file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network file is not valid JSON for the expected shape
    #[error("failed to parse network data: {0}")]
    Json(#[from] serde_json::Error),

    /// Station record failed validation
    #[error("invalid station record #{index}: {source}")]
    InvalidStation {
        index: usize,
        #[source]
        source: DomainError,
    },

    /// Two station records share an id
    #[error("duplicate station id {0}")]
    DuplicateStation(StationId),

    /// Connection record has a blank endpoint, blank line or zero time
    #[error("malformed connection #{index}: {source}")]
    MalformedConnection {
        index: usize,
        #[source]
        source: DomainError,
    },

    /// Connection refers to a station that is not in the file
    #[error("connection #{index} references unknown station {station}")]
    UnknownStation { index: usize, station: StationId },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InvalidTravelTime;

    #[test]
    fn error_display() {
        let err = NetworkError::DuplicateStation(StationId::parse("A01").unwrap());
        assert_eq!(err.to_string(), "duplicate station id A01");

        let err = NetworkError::MalformedConnection {
            index: 3,
            source: DomainError::from(InvalidTravelTime),
        };
        assert_eq!(
            err.to_string(),
            "malformed connection #3: travel time must be greater than 0 minutes"
        );

        let err = NetworkError::UnknownStation {
            index: 0,
            station: StationId::parse("Z99").unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "connection #0 references unknown station Z99"
        );
    }
}
