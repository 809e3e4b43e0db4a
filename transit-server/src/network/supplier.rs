//! The data-supplier contract consumed by the planner.

use crate::domain::{Edge, Item, Station, StationId};
use crate::graph::NeighborProvider;

/// Trait for providing network data on demand.
///
/// Every method is a pure query returning owned data. Absence (an empty
/// list, `None`) is a valid answer, never an error. This abstraction lets
/// the planner be tested with in-memory doubles.
pub trait StationSupplier: NeighborProvider {
    /// Every connection in the network.
    fn all_edges(&self) -> Vec<Edge>;

    /// Every station, in supplier order.
    fn all_stations(&self) -> Vec<Station>;

    /// Look up a station by identifier.
    fn station(&self, id: &StationId) -> Option<Station>;

    /// Resolve a display name to a station id. Names are not unique; the
    /// first matching station wins.
    fn resolve_id_by_name(&self, name: &str) -> Option<StationId>;

    /// Stations carrying optimizer attributes, as (weight, value) items.
    fn optimizer_items(&self) -> Vec<Item>;
}
