//! The metro network as a weighted undirected graph.
//!
//! Stations are vertices keyed by name; edges carry the distance between
//! adjacent stations in kilometres. Edges are stored in both directions so
//! neighbour lookup is a single map access from either end.
//!
//! Mutations never fail. They return `true` if the graph changed and
//! `false` if the input was rejected (unknown station, duplicate edge,
//! self-loop, zero weight), the same way `HashSet::insert` reports.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use crate::domain::{Station, station_name};
use crate::seed::Seed;

/// A station and its adjacency.
#[derive(Debug, Clone)]
struct Vertex {
    station: Station,
    /// Neighbour name -> distance in km.
    neighbours: BTreeMap<String, u32>,
}

/// The station graph.
///
/// Station arguments accept either a bare name (`Rajiv_Chowk`) or a full
/// identifier (`Rajiv_Chowk~BY`); the line suffix is ignored for lookup.
///
/// # Invariants
///
/// - `A` lists `B` as a neighbour iff `B` lists `A`, with the same weight
/// - No self-loops, no zero weights
/// - At most one edge between any pair
#[derive(Debug, Clone, Default)]
pub struct StationGraph {
    vertices: BTreeMap<String, Vertex>,
}

impl StationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from seed data.
    ///
    /// Connections the graph rejects are skipped and logged.
    pub fn from_seed(seed: &Seed) -> Self {
        let mut graph = Self::new();

        for station in &seed.stations {
            if !graph.add_vertex(station.clone()) {
                debug!(station = %station, "duplicate station in seed, keeping first");
            }
        }

        for conn in &seed.connections {
            if !graph.add_edge(&conn.from, &conn.to, conn.km) {
                warn!(
                    from = %conn.from,
                    to = %conn.to,
                    km = conn.km,
                    "skipping seed connection"
                );
            }
        }

        debug!(
            stations = graph.vertex_count(),
            edges = graph.edge_count(),
            "built station graph"
        );

        graph
    }

    /// Returns the number of stations.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of edges, counting each physical edge once.
    pub fn edge_count(&self) -> usize {
        let ends: usize = self.vertices.values().map(|v| v.neighbours.len()).sum();
        ends / 2
    }

    /// Check if a station exists.
    pub fn contains_vertex(&self, name: &str) -> bool {
        self.vertices.contains_key(station_name(name))
    }

    /// Look up a station by name or identifier.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.vertices.get(station_name(name)).map(|v| &v.station)
    }

    /// All stations, ordered by name.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.vertices.values().map(|v| &v.station)
    }

    /// Add a station.
    ///
    /// Returns `false` if a station with the same name already exists; the
    /// existing station and its edges are left untouched.
    pub fn add_vertex(&mut self, station: Station) -> bool {
        if self.vertices.contains_key(station.name()) {
            return false;
        }

        self.vertices.insert(
            station.name().to_string(),
            Vertex {
                station,
                neighbours: BTreeMap::new(),
            },
        );
        true
    }

    /// Remove a station and every edge touching it.
    pub fn remove_vertex(&mut self, name: &str) -> bool {
        let Some(vertex) = self.vertices.remove(station_name(name)) else {
            return false;
        };

        for nbr in vertex.neighbours.keys() {
            if let Some(other) = self.vertices.get_mut(nbr) {
                other.neighbours.remove(vertex.station.name());
            }
        }
        true
    }

    /// Check if two stations are directly connected.
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// Returns the distance of the direct edge between two stations.
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<u32> {
        self.vertices
            .get(station_name(a))?
            .neighbours
            .get(station_name(b))
            .copied()
    }

    /// Connect two stations with an edge of `km` kilometres.
    ///
    /// Returns `false` without changing the graph if either station is
    /// missing, the stations are the same, `km` is zero, or the edge exists.
    pub fn add_edge(&mut self, a: &str, b: &str, km: u32) -> bool {
        let (a, b) = (station_name(a), station_name(b));
        if a == b || km == 0 {
            return false;
        }
        if !self.contains_vertex(a) || !self.contains_vertex(b) || self.contains_edge(a, b) {
            return false;
        }

        if let Some(v) = self.vertices.get_mut(a) {
            v.neighbours.insert(b.to_string(), km);
        }
        if let Some(v) = self.vertices.get_mut(b) {
            v.neighbours.insert(a.to_string(), km);
        }
        true
    }

    /// Remove the edge between two stations.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> bool {
        let (a, b) = (station_name(a), station_name(b));
        if !self.contains_edge(a, b) {
            return false;
        }

        if let Some(v) = self.vertices.get_mut(a) {
            v.neighbours.remove(b);
        }
        if let Some(v) = self.vertices.get_mut(b) {
            v.neighbours.remove(a);
        }
        true
    }

    /// Neighbouring stations with the distance to each, ordered by name.
    ///
    /// Empty for an unknown station.
    pub fn neighbors_of<'a>(
        &'a self,
        name: &str,
    ) -> impl Iterator<Item = (&'a Station, u32)> + use<'a> {
        self.adjacent(name)
            .filter_map(|(nbr, km)| self.vertices.get(nbr).map(|v| (&v.station, km)))
    }

    /// Neighbour names with distances. Keys borrow from the graph.
    pub(crate) fn adjacent<'a>(
        &'a self,
        name: &str,
    ) -> impl Iterator<Item = (&'a str, u32)> + use<'a> {
        self.vertices
            .get(station_name(name))
            .into_iter()
            .flat_map(|v| v.neighbours.iter().map(|(n, km)| (n.as_str(), *km)))
    }

    /// Returns the graph's own key for a station, if present.
    pub(crate) fn key<'a>(&'a self, name: &str) -> Option<&'a str> {
        self.vertices
            .get_key_value(station_name(name))
            .map(|(k, _)| k.as_str())
    }

    /// Check whether `to` can be reached from `from`.
    ///
    /// Depth-first over an explicit frontier, returning as soon as a station
    /// with a direct edge to `to` is found. A station always reaches itself.
    pub fn has_path(&self, from: &str, to: &str) -> bool {
        let (Some(from), Some(to)) = (self.key(from), self.key(to)) else {
            return false;
        };
        if from == to {
            return true;
        }

        let mut processed: HashSet<&str> = HashSet::new();
        let mut frontier = vec![from];

        while let Some(name) = frontier.pop() {
            if self.contains_edge(name, to) {
                return true;
            }
            if !processed.insert(name) {
                continue;
            }
            for (nbr, _) in self.adjacent(name) {
                if !processed.contains(nbr) {
                    frontier.push(nbr);
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn st(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    /// A - B - C   D (isolated)
    fn small_graph() -> StationGraph {
        let mut g = StationGraph::new();
        for s in ["A~B", "B~B", "C~BY", "D~Y"] {
            g.add_vertex(st(s));
        }
        g.add_edge("A", "B", 3);
        g.add_edge("B", "C", 4);
        g
    }

    #[test]
    fn empty_graph() {
        let g = StationGraph::new();
        assert!(g.is_empty());
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.contains_vertex("A"));
    }

    #[test]
    fn add_vertex_rejects_duplicate_name() {
        let mut g = small_graph();
        assert!(!g.add_vertex(st("A~Y")));

        // Original station and its edge survive
        assert_eq!(g.station("A"), Some(&st("A~B")));
        assert!(g.contains_edge("A", "B"));
    }

    #[test]
    fn edges_are_symmetric() {
        let g = small_graph();
        assert!(g.contains_edge("A", "B"));
        assert!(g.contains_edge("B", "A"));
        assert_eq!(g.edge_weight("A", "B"), Some(3));
        assert_eq!(g.edge_weight("B", "A"), Some(3));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn lookup_accepts_identifiers() {
        let g = small_graph();
        assert!(g.contains_vertex("C~BY"));
        assert!(g.contains_vertex("C~Q"));
        assert!(g.contains_edge("B~B", "C~BY"));
        assert_eq!(g.station("C").map(Station::name), Some("C"));
    }

    #[test]
    fn add_edge_rejections() {
        let mut g = small_graph();

        // Unknown endpoint
        assert!(!g.add_edge("A", "Z", 1));
        // Duplicate, either direction
        assert!(!g.add_edge("A", "B", 9));
        assert!(!g.add_edge("B", "A", 9));
        assert_eq!(g.edge_weight("A", "B"), Some(3));
        // Self-loop
        assert!(!g.add_edge("A", "A", 1));
        // Zero weight
        assert!(!g.add_edge("A", "D", 0));

        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn remove_edge() {
        let mut g = small_graph();
        assert!(g.remove_edge("B", "A"));
        assert!(!g.contains_edge("A", "B"));
        assert!(!g.contains_edge("B", "A"));
        assert!(!g.remove_edge("A", "B"));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn remove_vertex_cascades() {
        let mut g = small_graph();
        assert!(g.remove_vertex("B~B"));

        assert!(!g.contains_vertex("B"));
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.neighbors_of("A").count(), 0);
        assert_eq!(g.neighbors_of("C").count(), 0);

        assert!(!g.remove_vertex("B"));
    }

    #[test]
    fn neighbors_ordered_by_name() {
        let mut g = small_graph();
        g.add_edge("B", "D", 1);

        let nbrs: Vec<(&str, u32)> = g.neighbors_of("B").map(|(s, km)| (s.name(), km)).collect();
        assert_eq!(nbrs, [("A", 3), ("C", 4), ("D", 1)]);

        assert_eq!(g.neighbors_of("Z").count(), 0);
    }

    #[test]
    fn stations_ordered_by_name() {
        let g = small_graph();
        let names: Vec<&str> = g.stations().map(Station::name).collect();
        assert_eq!(names, ["A", "B", "C", "D"]);
    }

    #[test]
    fn has_path_connected() {
        let g = small_graph();
        assert!(g.has_path("A", "B"));
        assert!(g.has_path("A", "C"));
        assert!(g.has_path("C", "A"));
    }

    #[test]
    fn has_path_disconnected_and_unknown() {
        let g = small_graph();
        assert!(!g.has_path("A", "D"));
        assert!(!g.has_path("D", "A"));
        assert!(!g.has_path("A", "Z"));
        assert!(!g.has_path("Z", "A"));
    }

    #[test]
    fn has_path_to_self() {
        let g = small_graph();
        assert!(g.has_path("A", "A"));
        // Isolated stations reach themselves too
        assert!(g.has_path("D", "D"));
        assert!(!g.has_path("Z", "Z"));
    }

    #[test]
    fn has_path_handles_cycles() {
        let mut g = small_graph();
        g.add_edge("A", "C", 10);
        assert!(!g.has_path("A", "D"));
        g.add_edge("C", "D", 2);
        assert!(g.has_path("A", "D"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const NAMES: [&str; 8] = ["S0", "S1", "S2", "S3", "S4", "S5", "S6", "S7"];

    fn build(edges: &[(usize, usize, u32)]) -> StationGraph {
        let mut g = StationGraph::new();
        for name in NAMES {
            g.add_vertex(Station::parse(&format!("{name}~B")).unwrap());
        }
        for &(a, b, km) in edges {
            g.add_edge(NAMES[a], NAMES[b], km);
        }
        g
    }

    fn edges() -> impl Strategy<Value = Vec<(usize, usize, u32)>> {
        proptest::collection::vec((0..NAMES.len(), 0..NAMES.len(), 1u32..50), 0..24)
    }

    proptest! {
        /// Every edge is visible from both ends with the same weight
        #[test]
        fn adjacency_is_symmetric(edges in edges()) {
            let g = build(&edges);
            for a in NAMES {
                for (nbr, km) in g.neighbors_of(a) {
                    prop_assert!(g.contains_edge(nbr.name(), a));
                    prop_assert_eq!(g.edge_weight(nbr.name(), a), Some(km));
                }
            }
        }

        /// Removing a vertex removes exactly its degree in edges
        #[test]
        fn remove_vertex_drops_degree(edges in edges(), victim in 0..NAMES.len()) {
            let mut g = build(&edges);
            let name = NAMES[victim];
            let degree = g.neighbors_of(name).count();
            let before = g.edge_count();

            prop_assert!(g.remove_vertex(name));
            prop_assert_eq!(g.edge_count(), before - degree);
            for other in NAMES {
                prop_assert!(g.neighbors_of(other).all(|(s, _)| s.name() != name));
            }
        }

        /// has_path agrees with itself in both directions
        #[test]
        fn reachability_is_symmetric(edges in edges(), a in 0..NAMES.len(), b in 0..NAMES.len()) {
            let g = build(&edges);
            prop_assert_eq!(g.has_path(NAMES[a], NAMES[b]), g.has_path(NAMES[b], NAMES[a]));
        }
    }
}
