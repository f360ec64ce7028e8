//! Route types.
//!
//! A `Route` is the raw stop sequence recovered by a search. An
//! `AnnotatedRoute` is the same trip reduced to way-points, with the
//! line changes marked.

use std::fmt;

use super::Station;

/// Which aggregate cost a query minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CostMode {
    /// Kilometres travelled.
    Distance,
    /// Travel time, including a fixed overhead per hop.
    Time,
}

impl CostMode {
    /// Unit of a route cost in this mode, for display.
    pub fn route_unit(&self) -> &'static str {
        match self {
            CostMode::Distance => "KM",
            CostMode::Time => "minutes",
        }
    }
}

impl fmt::Display for CostMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostMode::Distance => f.write_str("distance"),
            CostMode::Time => f.write_str("time"),
        }
    }
}

/// An ordered stop sequence from source to destination with its cost.
///
/// In distance mode `cost` is kilometres; in time mode it is whole
/// minutes, rounded up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Stops in travel order, source first.
    pub stops: Vec<Station>,
    /// Total cost of the route.
    pub cost: u64,
    /// Mode the cost was computed in.
    pub mode: CostMode,
}

impl Route {
    /// Creates a route.
    pub fn new(stops: Vec<Station>, cost: u64, mode: CostMode) -> Self {
        Self { stops, cost, mode }
    }

    /// Returns the first stop.
    pub fn origin(&self) -> Option<&Station> {
        self.stops.first()
    }

    /// Returns the last stop.
    pub fn destination(&self) -> Option<&Station> {
        self.stops.last()
    }

    /// Number of hops (edges) travelled.
    pub fn hop_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }
}

impl fmt::Display for Route {
    /// Whitespace-separated identifiers followed by the cost.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stop in &self.stops {
            write!(f, "{}  ", stop)?;
        }
        write!(f, "{}", self.cost)
    }
}

/// An entry in an annotated route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Waypoint {
    /// A station passed through (or started/ended at) without changing line.
    Stop(Station),
    /// A line change at `at`, continuing to `next` on the new line.
    Interchange { at: Station, next: Station },
}

impl Waypoint {
    /// Returns the stations covered by this way-point.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        let (first, second) = match self {
            Waypoint::Stop(station) => (station, None),
            Waypoint::Interchange { at, next } => (at, Some(next)),
        };
        std::iter::once(first).chain(second)
    }

    /// Returns true if this is an interchange marker.
    pub fn is_interchange(&self) -> bool {
        matches!(self, Waypoint::Interchange { .. })
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Waypoint::Stop(station) => write!(f, "{}", station),
            Waypoint::Interchange { at, next } => write!(f, "{} ==> {}", at, next),
        }
    }
}

/// A route reduced to way-points, with line changes marked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRoute {
    /// Way-points in travel order.
    pub waypoints: Vec<Waypoint>,
    /// Number of line changes.
    pub interchanges: usize,
    /// Total cost, carried over from the route.
    pub total_cost: u64,
    /// Mode the cost was computed in.
    pub mode: CostMode,
}

impl AnnotatedRoute {
    /// Flattens the way-points back into the stop sequence.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.waypoints.iter().flat_map(|w| w.stations())
    }

    /// Number of stations counted for fare purposes.
    pub fn station_count(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }
}

/// Fare for a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fare {
    /// Station count the fare was computed from.
    pub stations: usize,
    /// Fare in rupees.
    pub amount: u32,
}
