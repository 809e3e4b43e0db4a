//! Route planning over the data supplier.

mod config;
mod search;

pub use config::PlannerConfig;
pub use search::{PlanError, Planner, Route};
