//! Text rendering for the console.

use std::io::{self, Write};

use chrono::Duration;

use crate::domain::{AnnotatedRoute, CostMode, Fare};
use crate::graph::StationGraph;

use super::codes::StationCodes;

const BANNER: &str = "***********************************************************************";
const RULE: &str = "===============================================================";

/// Width of the station name column in tables.
const NAME_WIDTH: usize = 24;

/// Print every station, numbered.
pub fn station_list(out: &mut impl Write, graph: &StationGraph) -> io::Result<()> {
    writeln!(out, "\n{BANNER}")?;
    writeln!(out, "*{:^69}*", "STATIONS IN THE MAP")?;
    writeln!(out, "{BANNER}")?;
    for (i, station) in graph.stations().enumerate() {
        writeln!(out, "{}. {}", i + 1, station)?;
    }
    writeln!(out, "{BANNER}")
}

/// Print every station with its neighbours and the distance to each.
pub fn map(out: &mut impl Write, graph: &StationGraph) -> io::Result<()> {
    writeln!(out, "\t Metro Map")?;
    writeln!(out, "\t------------------")?;
    for station in graph.stations() {
        writeln!(out, "{} =>", station)?;
        for (neighbour, km) in graph.neighbors_of(station.name()) {
            writeln!(out, "\t{:<NAME_WIDTH$}{:>4} KM", neighbour.to_string(), km)?;
        }
        writeln!(out)?;
    }
    writeln!(out, "\t------------------")
}

/// Print every station with its input code.
pub fn code_list(out: &mut impl Write, codes: &StationCodes) -> io::Result<()> {
    writeln!(out, "\n{BANNER}")?;
    writeln!(out, "*{:^69}*", "STATION CODES IN THE MAP")?;
    writeln!(out, "{BANNER}")?;
    for (i, (name, code)) in codes.entries().iter().enumerate() {
        writeln!(out, "{}. {:<NAME_WIDTH$}{}", i + 1, name, code)?;
    }
    writeln!(out, "{BANNER}")
}

/// Print a shortest distance in kilometres.
pub fn distance(out: &mut impl Write, km: u64) -> io::Result<()> {
    writeln!(out, "\nShortest distance: {km} KM")
}

/// Print a shortest travel time given in seconds.
pub fn travel_time(out: &mut impl Write, secs: u64) -> io::Result<()> {
    let d = i64::try_from(secs)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or(Duration::MAX);
    writeln!(out, "\nShortest time: {}", format_duration(d))
}

/// Formats as `M minutes (S seconds)`.
pub fn format_duration(d: Duration) -> String {
    format!("{} minutes ({} seconds)", d.num_minutes(), d.num_seconds() % 60)
}

/// Print an annotated route: totals, then numbered way-points.
pub fn route(out: &mut impl Write, from: &str, to: &str, route: &AnnotatedRoute) -> io::Result<()> {
    let (heading, total) = match route.mode {
        CostMode::Distance => ("Distance-wise", "Total distance"),
        CostMode::Time => ("Time-wise", "Estimated time"),
    };

    writeln!(out, "\n{RULE}")?;
    writeln!(out, "   Shortest Path ({heading}) from {from} to {to}")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{total}: {} {}", route.total_cost, route.mode.route_unit())?;
    writeln!(out, "Number of interchanges: {}", route.interchanges)?;
    writeln!(out, "Route:")?;
    for (i, waypoint) in route.waypoints.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, waypoint)?;
    }
    writeln!(out, "{RULE}")
}

/// Print a fare.
pub fn fare(
    out: &mut impl Write,
    from: &str,
    to: &str,
    mode: CostMode,
    fare: &Fare,
) -> io::Result<()> {
    let heading = match mode {
        CostMode::Distance => "Distance-wise",
        CostMode::Time => "Time-wise",
    };

    writeln!(out, "\n{RULE}")?;
    writeln!(out, "   Fare Information ({heading}) from {from} to {to}")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Number of stations: {}", fare.stations)?;
    writeln!(out, "Total fare: Rs. {}", fare.amount)?;
    writeln!(out, "{RULE}")
}
