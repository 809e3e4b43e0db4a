//! Network data supplier.
//!
//! Loads stations and connections from a JSON file, validates them once,
//! and answers the queries the planner needs through [`StationSupplier`].

mod error;
mod store;
mod supplier;
mod types;

pub use error::NetworkError;
pub use store::TransitNetwork;
pub use supplier::StationSupplier;
pub use types::{ConnectionRecord, NetworkFile, StationRecord};
