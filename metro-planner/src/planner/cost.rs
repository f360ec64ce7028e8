//! Minimum aggregate cost between two stations.
//!
//! Priority relaxation over non-negative edge costs. Every station starts
//! at infinite cost except the source. The cheapest tentative station is
//! popped and finalized; finalized stations are never relaxed again. A
//! station may sit in the heap several times after successive improvements;
//! the stale copies are skipped when popped.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, trace};

use crate::domain::{CostMode, Station};
use crate::graph::StationGraph;

use super::config::CostModel;
use super::error::QueryError;

/// Result of settling the destination.
struct Settled<'a> {
    cost: u64,
    /// Station -> the station it was last improved from.
    predecessors: HashMap<&'a str, &'a str>,
}

/// Computes the cheapest cost from one station to another.
pub struct ShortestCostEngine<'a> {
    graph: &'a StationGraph,
    model: &'a CostModel,
}

impl<'a> ShortestCostEngine<'a> {
    /// Create a new engine over `graph`.
    pub fn new(graph: &'a StationGraph, model: &'a CostModel) -> Self {
        Self { graph, model }
    }

    /// Minimum cost from `from` to `to`.
    ///
    /// Distance mode returns kilometres; time mode returns seconds.
    pub fn cost(&self, from: &str, to: &str, mode: CostMode) -> Result<u64, QueryError> {
        let (src, dst) = self.endpoints(from, to)?;
        let settled = self
            .settle(src, dst, mode)
            .ok_or_else(|| QueryError::unreachable(src, dst))?;

        debug!(from = src, to = dst, %mode, cost = settled.cost, "shortest cost");
        Ok(settled.cost)
    }

    /// Cheapest stop sequence from `from` to `to`, with its cost.
    ///
    /// Costs are in the same units as [`ShortestCostEngine::cost`].
    pub fn path(
        &self,
        from: &str,
        to: &str,
        mode: CostMode,
    ) -> Result<(Vec<&'a Station>, u64), QueryError> {
        let (src, dst) = self.endpoints(from, to)?;
        let settled = self
            .settle(src, dst, mode)
            .ok_or_else(|| QueryError::unreachable(src, dst))?;

        let mut names = vec![dst];
        let mut current = dst;
        while let Some(&prev) = settled.predecessors.get(current) {
            names.push(prev);
            current = prev;
        }
        names.reverse();

        let stops = names
            .into_iter()
            .map(|name| {
                self.graph
                    .station(name)
                    .ok_or_else(|| QueryError::UnknownStation(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((stops, settled.cost))
    }

    fn endpoints(&self, from: &str, to: &str) -> Result<(&'a str, &'a str), QueryError> {
        let src = self
            .graph
            .key(from)
            .ok_or_else(|| QueryError::UnknownStation(from.to_string()))?;
        let dst = self
            .graph
            .key(to)
            .ok_or_else(|| QueryError::UnknownStation(to.to_string()))?;
        Ok((src, dst))
    }

    /// Relax from `src` until `dst` is popped. `None` if it never is.
    fn settle(&self, src: &'a str, dst: &'a str, mode: CostMode) -> Option<Settled<'a>> {
        let mut tentative: HashMap<&'a str, u64> = HashMap::new();
        let mut predecessors: HashMap<&'a str, &'a str> = HashMap::new();
        let mut finalized: HashSet<&'a str> = HashSet::new();
        let mut heap: BinaryHeap<Reverse<(u64, &'a str)>> = BinaryHeap::new();

        tentative.insert(src, 0);
        heap.push(Reverse((0, src)));

        while let Some(Reverse((cost, name))) = heap.pop() {
            if !finalized.insert(name) {
                trace!(station = name, cost, "skipping stale heap entry");
                continue;
            }

            if name == dst {
                return Some(Settled { cost, predecessors });
            }

            for (nbr, km) in self.graph.adjacent(name) {
                if finalized.contains(nbr) {
                    continue;
                }

                let candidate = cost + self.model.edge_cost(km, mode);
                if tentative.get(nbr).is_none_or(|&old| candidate < old) {
                    tentative.insert(nbr, candidate);
                    predecessors.insert(nbr, name);
                    heap.push(Reverse((candidate, nbr)));
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::delhi_metro;

    fn st(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    /// Square with a diagonal:
    ///
    /// ```text
    /// A --1-- B
    /// |     / |
    /// 10   3  1
    /// |  /    |
    /// D --1-- C
    /// ```
    fn square() -> StationGraph {
        let mut g = StationGraph::new();
        for s in ["A~B", "B~B", "C~B", "D~B", "E~Y"] {
            g.add_vertex(st(s));
        }
        g.add_edge("A", "B", 1);
        g.add_edge("B", "C", 1);
        g.add_edge("C", "D", 1);
        g.add_edge("A", "D", 10);
        g.add_edge("B", "D", 3);
        g
    }

    #[test]
    fn distance_prefers_cheaper_detour() {
        let g = square();
        let model = CostModel::default();
        let engine = ShortestCostEngine::new(&g, &model);

        assert_eq!(engine.cost("A", "D", CostMode::Distance), Ok(3));
        assert_eq!(engine.cost("D", "A", CostMode::Distance), Ok(3));
    }

    #[test]
    fn time_mode_penalises_hops() {
        let g = square();
        let model = CostModel::default();
        let engine = ShortestCostEngine::new(&g, &model);

        // A-B-D: 2 hops, 4 km = 240 + 160; A-B-C-D: 3 hops, 3 km = 360 + 120
        assert_eq!(engine.cost("A", "D", CostMode::Time), Ok(400));
    }

    #[test]
    fn same_station_costs_nothing() {
        let g = square();
        let model = CostModel::default();
        let engine = ShortestCostEngine::new(&g, &model);

        assert_eq!(engine.cost("C", "C", CostMode::Distance), Ok(0));
        assert_eq!(engine.cost("E", "E", CostMode::Time), Ok(0));
    }

    #[test]
    fn unreachable_destination() {
        let g = square();
        let model = CostModel::default();
        let engine = ShortestCostEngine::new(&g, &model);

        assert_eq!(
            engine.cost("A", "E", CostMode::Distance),
            Err(QueryError::unreachable("A", "E"))
        );
    }

    #[test]
    fn unknown_station() {
        let g = square();
        let model = CostModel::default();
        let engine = ShortestCostEngine::new(&g, &model);

        assert_eq!(
            engine.cost("A", "Z", CostMode::Distance),
            Err(QueryError::UnknownStation("Z".into()))
        );
        assert_eq!(
            engine.cost("Z~B", "A", CostMode::Distance),
            Err(QueryError::UnknownStation("Z~B".into()))
        );
    }

    #[test]
    fn path_follows_predecessors() {
        let g = square();
        let model = CostModel::default();
        let engine = ShortestCostEngine::new(&g, &model);

        let (stops, cost) = engine.path("A", "D", CostMode::Distance).unwrap();
        let names: Vec<&str> = stops.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["A", "B", "C", "D"]);
        assert_eq!(cost, 3);

        let (stops, cost) = engine.path("A", "D", CostMode::Time).unwrap();
        let names: Vec<&str> = stops.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["A", "B", "D"]);
        assert_eq!(cost, 400);
    }

    #[test]
    fn path_to_self_is_single_stop() {
        let g = square();
        let model = CostModel::default();
        let engine = ShortestCostEngine::new(&g, &model);

        let (stops, cost) = engine.path("B", "B", CostMode::Distance).unwrap();
        assert_eq!(stops.len(), 1);
        assert_eq!(cost, 0);
    }

    #[test]
    fn reference_seed_distances() {
        let g = StationGraph::from_seed(&delhi_metro());
        let model = CostModel::default();
        let engine = ShortestCostEngine::new(&g, &model);

        assert_eq!(
            engine.cost("Noida_Sector_62~B", "Vaishali~B", CostMode::Distance),
            Ok(26)
        );
        assert_eq!(
            engine.cost("Noida_Sector_62", "Huda_City_Center", CostMode::Distance),
            Ok(52)
        );
        // 3 hops, 26 km
        assert_eq!(
            engine.cost("Noida_Sector_62", "Vaishali", CostMode::Time),
            Ok(3 * 120 + 40 * 26)
        );
    }
}
