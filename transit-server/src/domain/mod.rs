//! Domain types for the transit route planner.
//!
//! This module contains the core domain model types that represent
//! validated network data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod edge;
mod error;
mod item;
mod line;
mod path;
mod station;

pub use edge::{Edge, InvalidTravelTime, TravelTime};
pub use error::DomainError;
pub use item::Item;
pub use line::{InvalidLineId, LineId};
pub use path::Path;
pub use station::{Coordinates, InvalidStationId, Station, StationId};
