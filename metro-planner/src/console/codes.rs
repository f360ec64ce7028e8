//! Short station codes for console input.

use std::collections::BTreeMap;

use crate::domain::station_name;
use crate::graph::StationGraph;

/// Minimum length of a generated code.
const MIN_CODE_LEN: usize = 2;

/// Generate the short code for a station name.
///
/// The code is the first letter of each `_`-separated word followed by every
/// digit in the name, uppercased. Codes shorter than two characters are
/// padded with the name's following letters, so `Saket` becomes `SA`.
pub fn station_code(name: &str) -> String {
    let mut code: String = name
        .split('_')
        .filter_map(|word| word.chars().next())
        .filter(char::is_ascii_alphabetic)
        .chain(name.chars().filter(char::is_ascii_digit))
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if code.len() < MIN_CODE_LEN {
        let missing = MIN_CODE_LEN - code.len();
        code.extend(
            name.chars()
                .filter(char::is_ascii_alphabetic)
                .skip(1)
                .take(missing)
                .map(|c| c.to_ascii_uppercase()),
        );
    }

    code
}

/// Station codes for every station in a graph.
#[derive(Debug, Clone, Default)]
pub struct StationCodes {
    /// (name, code) in station order.
    entries: Vec<(String, String)>,
    /// Code -> every station name carrying it.
    by_code: BTreeMap<String, Vec<String>>,
}

impl StationCodes {
    /// Generate codes for every station in `graph`.
    pub fn new(graph: &StationGraph) -> Self {
        let mut codes = Self::default();

        for station in graph.stations() {
            let name = station.name().to_string();
            let code = station_code(&name);
            codes
                .by_code
                .entry(code.clone())
                .or_default()
                .push(name.clone());
            codes.entries.push((name, code));
        }

        codes
    }

    /// Returns (name, code) pairs in station order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Returns the code for a station name.
    pub fn code_of(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, code)| code.as_str())
    }

    /// Resolve user input to a station name.
    ///
    /// Accepts a station name, a full `Name~Codes` identifier or a code
    /// (case-insensitive). Codes shared by several stations don't resolve.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        let name = station_name(input);
        if name.is_empty() {
            return None;
        }

        if let Some((known, _)) = self.entries.iter().find(|(n, _)| n == name) {
            return Some(known.as_str());
        }

        match self.by_code.get(&name.to_ascii_uppercase())?.as_slice() {
            [only] => Some(only.as_str()),
            _ => None,
        }
    }
}
