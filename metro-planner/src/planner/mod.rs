//! Route planning over the station graph.
//!
//! This module implements the four query classes: minimum distance,
//! minimum time, an annotated route with line changes marked, and a
//! station-count based fare.
//!
//! Costs come from a priority-relaxation engine; concrete routes come from
//! an exhaustive depth-first search (or, if configured, relaxation with
//! predecessor tracking).

mod annotate;
mod config;
mod cost;
mod error;
mod fare;
mod query;
mod search;


pub use annotate::annotate;
pub use config::{CostModel, FareTable, FareTier, InvalidRouteStrategy, PlannerConfig, RouteStrategy};
pub use cost::ShortestCostEngine;
pub use error::QueryError;
pub use fare::FareCalculator;
pub use query::Planner;
pub use search::{RouteSearchEngine, route_cost};
