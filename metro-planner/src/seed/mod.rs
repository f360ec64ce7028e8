//! Seed data for the station graph.
//!
//! The network topology is fixed at start-up: a list of stations and a
//! list of connections between them. It comes either from the built-in
//! Delhi Metro map or from a JSON file of the same shape:
//!
//! ```json
//! {
//!   "stations": ["Saket~Y", "AIIMS~Y"],
//!   "connections": [{ "from": "Saket~Y", "to": "AIIMS~Y", "km": 6 }]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::Station;

/// Errors from loading seed files.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Seed file could not be read
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Seed file is not valid seed JSON
    #[error("invalid seed file {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A connection between two stations.
///
/// Endpoints are station identifiers or bare names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
    /// Distance in kilometres.
    pub km: u32,
}

/// Stations and connections to build a graph from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    pub stations: Vec<Station>,
    pub connections: Vec<Connection>,
}

impl Seed {
    /// Load a seed from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| SeedError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Builder for seed data.
///
/// Provides a fluent API for listing stations and connections.
#[derive(Debug, Default)]
pub struct SeedBuilder {
    inner: Seed,
}

impl SeedBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station by identifier (`Name~Codes`).
    ///
    /// Invalid identifiers are skipped.
    pub fn station(mut self, identifier: &str) -> Self {
        match Station::parse(identifier) {
            Ok(station) => self.inner.stations.push(station),
            Err(e) => warn!(identifier, error = %e, "skipping invalid seed station"),
        }
        self
    }

    /// Add a connection of `km` kilometres.
    pub fn connect(mut self, from: &str, to: &str, km: u32) -> Self {
        self.inner.connections.push(Connection {
            from: from.to_string(),
            to: to.to_string(),
            km,
        });
        self
    }

    /// Build the seed.
    pub fn build(self) -> Seed {
        self.inner
    }
}

/// The reference Delhi Metro map.
///
/// Blue, Yellow, Orange and Pink line stations around the central
/// interchanges at Rajiv Chowk, New Delhi and Rajouri Garden.
pub fn delhi_metro() -> Seed {
    SeedBuilder::new()
        .station("Noida_Sector_62~B")
        .station("Botanical_Garden~B")
        .station("Yamuna_Bank~B")
        .station("Rajiv_Chowk~BY")
        .station("Vaishali~B")
        .station("Moti_Nagar~B")
        .station("Janak_Puri_West~BO")
        .station("Dwarka_Sector_21~B")
        .station("Huda_City_Center~Y")
        .station("Saket~Y")
        .station("AIIMS~Y")
        .station("Rajiv_Chowk~BY") // listed twice in the source map; second add is a no-op
        .station("New_Delhi~YO")
        .station("Chandni_Chowk~Y")
        .station("Vishwavidyalaya~Y")
        .station("Shivaji_Stadium~O")
        .station("DDS_Campus~O")
        .station("IGI_Airport~O")
        .station("Rajouri_Garden~BP")
        .station("Netaji_Subhash_Place~PR")
        .station("Punjabi_Bagh_West~P")
        // Distances in km
        .connect("Noida_Sector_62~B", "Botanical_Garden~B", 8)
        .connect("Botanical_Garden~B", "Yamuna_Bank~B", 10)
        .connect("Yamuna_Bank~B", "Vaishali~B", 8)
        .connect("Yamuna_Bank~B", "Rajiv_Chowk~BY", 6)
        .connect("Rajiv_Chowk~BY", "Moti_Nagar~B", 9)
        .connect("Moti_Nagar~B", "Janak_Puri_West~BO", 7)
        .connect("Janak_Puri_West~BO", "Dwarka_Sector_21~B", 6)
        .connect("Huda_City_Center~Y", "Saket~Y", 15)
        .connect("Saket~Y", "AIIMS~Y", 6)
        .connect("AIIMS~Y", "Rajiv_Chowk~BY", 7)
        .connect("Rajiv_Chowk~BY", "New_Delhi~YO", 1)
        .connect("New_Delhi~YO", "Chandni_Chowk~Y", 2)
        .connect("Chandni_Chowk~Y", "Vishwavidyalaya~Y", 5)
        .connect("New_Delhi~YO", "Shivaji_Stadium~O", 2)
        .connect("Shivaji_Stadium~O", "DDS_Campus~O", 7)
        .connect("DDS_Campus~O", "IGI_Airport~O", 8)
        .connect("Moti_Nagar~B", "Rajouri_Garden~BP", 2)
        .connect("Punjabi_Bagh_West~P", "Rajouri_Garden~BP", 2)
        .connect("Punjabi_Bagh_West~P", "Netaji_Subhash_Place~PR", 3)
        .build()
}
