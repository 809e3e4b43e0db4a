//! Transit network route planner server.
//!
//! Answers reachability, path enumeration, fewest-hops and fastest routes,
//! small optimal round trips, and "what can I see in N minutes" over a
//! metro network loaded from a JSON file.

pub mod domain;
pub mod graph;
pub mod network;
pub mod optimize;
pub mod planner;
pub mod web;
