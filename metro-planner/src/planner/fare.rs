//! Fare calculation.
//!
//! The fare depends only on how many stations the annotated route counts:
//! the way-point count minus one. An interchange way-point covers two stops
//! but counts once.

use tracing::debug;

use crate::domain::{CostMode, Fare};
use crate::graph::StationGraph;

use super::annotate::annotate;
use super::config::PlannerConfig;
use super::error::QueryError;
use super::search::RouteSearchEngine;

/// Computes fares from searched, annotated routes.
pub struct FareCalculator<'a> {
    search: RouteSearchEngine<'a>,
    config: &'a PlannerConfig,
}

impl<'a> FareCalculator<'a> {
    /// Create a new calculator over `graph`.
    pub fn new(graph: &'a StationGraph, config: &'a PlannerConfig) -> Self {
        Self {
            search: RouteSearchEngine::new(graph, config),
            config,
        }
    }

    /// Fare for the route found in `mode` from `from` to `to`.
    pub fn fare(&self, from: &str, to: &str, mode: CostMode) -> Result<Fare, QueryError> {
        let route = self.search.search(from, to, mode)?;
        let stations = annotate(&route).station_count();
        let amount = self.config.fares.fare_for(stations);

        debug!(from, to, %mode, stations, amount, "fare");
        Ok(Fare { stations, amount })
    }
}
