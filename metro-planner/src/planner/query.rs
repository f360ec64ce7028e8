//! Query facade over the planner engines.

use tracing::debug;

use crate::domain::{AnnotatedRoute, CostMode, Fare, Route};
use crate::graph::StationGraph;

use super::annotate::annotate;
use super::config::PlannerConfig;
use super::cost::ShortestCostEngine;
use super::error::QueryError;
use super::fare::FareCalculator;
use super::search::RouteSearchEngine;

/// Answers the four query classes over one graph.
///
/// Every query checks that both stations exist and are connected before
/// any cost or route computation runs.
pub struct Planner<'a> {
    graph: &'a StationGraph,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a StationGraph, config: &'a PlannerConfig) -> Self {
        Self { graph, config }
    }

    /// Returns the graph this planner queries.
    pub fn graph(&self) -> &'a StationGraph {
        self.graph
    }

    /// Check both stations exist and are connected.
    pub fn validate(&self, from: &str, to: &str) -> Result<(), QueryError> {
        for name in [from, to] {
            if !self.graph.contains_vertex(name) {
                return Err(QueryError::UnknownStation(name.trim().to_string()));
            }
        }

        if !self.graph.has_path(from, to) {
            debug!(from, to, "stations are not connected");
            return Err(QueryError::no_path(from.trim(), to.trim()));
        }

        Ok(())
    }

    /// Minimum cost: kilometres, or seconds in time mode.
    pub fn shortest_cost(&self, from: &str, to: &str, mode: CostMode) -> Result<u64, QueryError> {
        self.validate(from, to)?;
        ShortestCostEngine::new(self.graph, &self.config.cost_model).cost(from, to, mode)
    }

    /// A concrete route: kilometres, or whole minutes in time mode.
    pub fn search_route(&self, from: &str, to: &str, mode: CostMode) -> Result<Route, QueryError> {
        self.validate(from, to)?;
        RouteSearchEngine::new(self.graph, self.config).search(from, to, mode)
    }

    /// A route reduced to way-points with interchanges marked.
    pub fn annotated_route(
        &self,
        from: &str,
        to: &str,
        mode: CostMode,
    ) -> Result<AnnotatedRoute, QueryError> {
        let route = self.search_route(from, to, mode)?;
        Ok(annotate(&route))
    }

    /// Station count and fare for the route found in `mode`.
    pub fn fare(&self, from: &str, to: &str, mode: CostMode) -> Result<Fare, QueryError> {
        self.validate(from, to)?;
        FareCalculator::new(self.graph, self.config).fare(from, to, mode)
    }
}
