//! Domain types for the metro route planner.
//!
//! This module contains the core domain model types that represent
//! validated network data. Types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod line;
mod route;
mod station;

pub use line::{InvalidLineCode, LineCode};
pub use route::{AnnotatedRoute, CostMode, Fare, Route, Waypoint};
pub use station::{InvalidStation, LINE_SEPARATOR, Station, station_name};
