//! Station types.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::line::{InvalidLineCode, LineCode};

/// Separator between the station name and its line codes in an identifier.
pub const LINE_SEPARATOR: char = '~';

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidStation {
    /// The name part is empty
    #[error("station name must not be empty")]
    EmptyName,

    /// The name contains whitespace or the line separator
    #[error("station name {0:?} must not contain whitespace or '~'")]
    BadName(String),

    /// No line codes after the separator
    #[error("station {0:?} must be served by at least one line")]
    NoLines(String),

    /// A character after the separator is not a line code
    #[error(transparent)]
    Line(#[from] InvalidLineCode),
}

/// A metro station: a name plus the set of lines serving it.
///
/// Stations are written as `Name~Codes`, e.g. `Rajiv_Chowk~BY` for a
/// station on the Blue and Yellow lines. Names use underscores instead
/// of spaces so a route can be printed as a whitespace-separated list.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::Station;
///
/// let rc = Station::parse("Rajiv_Chowk~BY").unwrap();
/// assert_eq!(rc.name(), "Rajiv_Chowk");
/// assert!(rc.is_multi_line());
/// assert_eq!(rc.to_string(), "Rajiv_Chowk~BY");
///
/// assert!(Station::parse("Rajiv_Chowk").is_err());
/// assert!(Station::parse("~B").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Station {
    name: String,
    lines: BTreeSet<LineCode>,
}

impl Station {
    /// Create a station from a name and the lines serving it.
    pub fn new(
        name: impl Into<String>,
        lines: impl IntoIterator<Item = LineCode>,
    ) -> Result<Self, InvalidStation> {
        let name = name.into();
        if name.is_empty() {
            return Err(InvalidStation::EmptyName);
        }
        if name
            .chars()
            .any(|c| c.is_whitespace() || c == LINE_SEPARATOR)
        {
            return Err(InvalidStation::BadName(name));
        }

        let lines: BTreeSet<LineCode> = lines.into_iter().collect();
        if lines.is_empty() {
            return Err(InvalidStation::NoLines(name));
        }

        Ok(Self { name, lines })
    }

    /// Parse a `Name~Codes` identifier.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        let (name, codes) = s
            .split_once(LINE_SEPARATOR)
            .ok_or_else(|| InvalidStation::NoLines(s.to_string()))?;

        let lines = codes
            .chars()
            .map(LineCode::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(name, lines)
    }

    /// Returns the station name (without line codes).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the lines serving this station, in code order.
    pub fn lines(&self) -> &BTreeSet<LineCode> {
        &self.lines
    }

    /// Returns true if the station is served by more than one line.
    pub fn is_multi_line(&self) -> bool {
        self.lines.len() > 1
    }

    /// Returns true if both stations are served by exactly the same lines.
    pub fn same_lines(&self, other: &Station) -> bool {
        self.lines == other.lines
    }

    /// Returns true if the station is on the given line.
    pub fn serves(&self, line: LineCode) -> bool {
        self.lines.contains(&line)
    }
}

/// Returns the name part of a station identifier.
///
/// Accepts both `Name~Codes` and a bare `Name`.
pub fn station_name(identifier: &str) -> &str {
    let identifier = identifier.trim();
    match identifier.split_once(LINE_SEPARATOR) {
        Some((name, _)) => name,
        None => identifier,
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, LINE_SEPARATOR)?;
        for line in &self.lines {
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Station {
    type Error = InvalidStation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Station::parse(&value)
    }
}

impl From<Station> for String {
    fn from(station: Station) -> Self {
        station.to_string()
    }
}
