//! Route search: recover a concrete stop sequence and its cost.
//!
//! The default strategy is an exhaustive depth-first search over an
//! explicit work stack. A station is marked processed when its frame is
//! popped, not when it is pushed, so several frames for one station can sit
//! on the stack at once; only the first one popped is expanded. Every frame
//! that reaches the destination is compared against the best so far.
//!
//! This is not a guaranteed shortest-path search. Once a station has been
//! popped it is never expanded again, so a cheaper route through it that is
//! discovered later is lost. [`RouteStrategy::Relaxation`] gives the exact
//! answer at the cost of a priority queue.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::{CostMode, Route, Station};
use crate::graph::StationGraph;

use super::config::{PlannerConfig, RouteStrategy};
use super::cost::ShortestCostEngine;
use super::error::QueryError;

/// Seconds per minute, for converting time-mode route costs.
const SECS_PER_MIN: u64 = 60;

/// Work-stack frame.
#[derive(Debug, Clone)]
struct Frame<'a> {
    /// Station this frame sits at.
    station: &'a str,

    /// Stops from the source up to and including `station`.
    path: Vec<&'a str>,

    /// Accumulated kilometres.
    distance: u64,

    /// Accumulated seconds.
    time: u64,
}

impl Frame<'_> {
    fn cost(&self, mode: CostMode) -> u64 {
        match mode {
            CostMode::Distance => self.distance,
            CostMode::Time => self.time,
        }
    }
}

/// Finds a route between two stations.
pub struct RouteSearchEngine<'a> {
    graph: &'a StationGraph,
    config: &'a PlannerConfig,
}

impl<'a> RouteSearchEngine<'a> {
    /// Create a new engine over `graph`.
    pub fn new(graph: &'a StationGraph, config: &'a PlannerConfig) -> Self {
        Self { graph, config }
    }

    /// Find a route using the configured strategy.
    ///
    /// Distance-mode costs are kilometres; time-mode costs are whole
    /// minutes, rounded up.
    pub fn search(&self, from: &str, to: &str, mode: CostMode) -> Result<Route, QueryError> {
        match self.config.strategy {
            RouteStrategy::DepthFirst => self.depth_first(from, to, mode),
            RouteStrategy::Relaxation => self.relaxation(from, to, mode),
        }
    }

    /// Find a route by minimum distance.
    pub fn minimum_distance(&self, from: &str, to: &str) -> Result<Route, QueryError> {
        self.search(from, to, CostMode::Distance)
    }

    /// Find a route by minimum time.
    pub fn minimum_time(&self, from: &str, to: &str) -> Result<Route, QueryError> {
        self.search(from, to, CostMode::Time)
    }

    /// Exhaustive work-stack search with pop-time processed marking.
    pub fn depth_first(&self, from: &str, to: &str, mode: CostMode) -> Result<Route, QueryError> {
        let src = self
            .graph
            .key(from)
            .ok_or_else(|| QueryError::UnknownStation(from.to_string()))?;
        let dst = self
            .graph
            .key(to)
            .ok_or_else(|| QueryError::UnknownStation(to.to_string()))?;

        let model = &self.config.cost_model;
        let mut processed: HashSet<&str> = HashSet::new();
        let mut best: Option<Frame<'a>> = None;
        let mut frames_popped = 0usize;

        let mut stack = vec![Frame {
            station: src,
            path: vec![src],
            distance: 0,
            time: 0,
        }];

        while let Some(frame) = stack.pop() {
            frames_popped += 1;

            if !processed.insert(frame.station) {
                continue;
            }

            if frame.station == dst {
                let cost = frame.cost(mode);
                if best.as_ref().is_none_or(|b| cost < b.cost(mode)) {
                    trace!(cost, hops = frame.path.len() - 1, "new best route");
                    best = Some(frame);
                }
                continue;
            }

            for (nbr, km) in self.graph.adjacent(frame.station) {
                if processed.contains(nbr) {
                    continue;
                }

                let mut path = frame.path.clone();
                path.push(nbr);
                stack.push(Frame {
                    station: nbr,
                    path,
                    distance: frame.distance + model.edge_cost(km, CostMode::Distance),
                    time: frame.time + model.edge_cost(km, CostMode::Time),
                });
            }
        }

        let best = best.ok_or_else(|| QueryError::no_path(src, dst))?;
        debug!(
            from = src,
            to = dst,
            %mode,
            frames_popped,
            stops = best.path.len(),
            "depth-first route search complete"
        );

        let stops = self.resolve(&best.path)?;
        Ok(Route::new(stops, route_cost(best.cost(mode), mode), mode))
    }

    /// Exact search: priority relaxation with predecessor tracking.
    pub fn relaxation(&self, from: &str, to: &str, mode: CostMode) -> Result<Route, QueryError> {
        let engine = ShortestCostEngine::new(self.graph, &self.config.cost_model);
        let (stops, cost) = engine.path(from, to, mode).map_err(|e| match e {
            QueryError::Unreachable { from, to } => QueryError::NoPathFound { from, to },
            other => other,
        })?;

        debug!(from, to, %mode, stops = stops.len(), "relaxation route search complete");

        let stops = stops.into_iter().cloned().collect();
        Ok(Route::new(stops, route_cost(cost, mode), mode))
    }

    fn resolve(&self, names: &[&str]) -> Result<Vec<Station>, QueryError> {
        names
            .iter()
            .map(|name| {
                self.graph
                    .station(name)
                    .cloned()
                    .ok_or_else(|| QueryError::UnknownStation((*name).to_string()))
            })
            .collect()
    }
}

/// Converts an engine cost into route units: km stay km, seconds become
/// whole minutes rounded up.
pub fn route_cost(raw: u64, mode: CostMode) -> u64 {
    match mode {
        CostMode::Distance => raw,
        CostMode::Time => raw.div_ceil(SECS_PER_MIN),
    }
}
