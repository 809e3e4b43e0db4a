//! Application state for the web layer.

use std::sync::Arc;

use crate::network::TransitNetwork;
use crate::planner::{Planner, PlannerConfig};

/// Shared application state.
///
/// The network is read-only after loading, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    /// Loaded transit network
    pub network: Arc<TransitNetwork>,

    /// Route planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: TransitNetwork, config: PlannerConfig) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
        }
    }

    /// A planner over the shared network.
    pub fn planner(&self) -> Planner<'_, TransitNetwork> {
        Planner::new(&*self.network, &*self.config)
    }
}
