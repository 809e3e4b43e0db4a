//! Web layer for the transit route planner.
//!
//! Provides HTTP endpoints for station listings, routing, tours and the
//! time-budget optimizer.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{ENDPOINTS, Endpoint, create_router};
pub use state::AppState;
