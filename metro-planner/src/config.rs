//! Process configuration.
//!
//! Read once at start-up from environment variables:
//!
//! - `METRO_SEED_FILE`: path to a JSON seed file. Defaults to the built-in
//!   Delhi Metro map.
//! - `METRO_ROUTE_STRATEGY`: `dfs` (default) or `relaxation`.
//!
//! Log filtering is configured separately through `RUST_LOG`.

use std::path::PathBuf;

use tracing::info;

use crate::planner::{InvalidRouteStrategy, PlannerConfig};
use crate::seed::{Seed, SeedError, delhi_metro};

/// Environment variable naming the seed file.
pub const SEED_FILE_VAR: &str = "METRO_SEED_FILE";

/// Environment variable selecting the route strategy.
pub const STRATEGY_VAR: &str = "METRO_ROUTE_STRATEGY";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable holds a value we don't understand
    #[error("{var}: {source}")]
    Strategy {
        var: &'static str,
        source: InvalidRouteStrategy,
    },

    /// The configured seed could not be loaded
    #[error(transparent)]
    Seed(#[from] SeedError),
}

/// Application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Seed file to load instead of the built-in map.
    pub seed_path: Option<PathBuf>,

    /// Planner settings.
    pub planner: PlannerConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var: &str| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let seed_path = get(SEED_FILE_VAR).map(PathBuf::from);

        let mut planner = PlannerConfig::default();
        if let Some(value) = get(STRATEGY_VAR) {
            planner.strategy = value.parse().map_err(|source| ConfigError::Strategy {
                var: STRATEGY_VAR,
                source,
            })?;
        }

        Ok(Self { seed_path, planner })
    }

    /// Load the configured seed.
    pub fn load_seed(&self) -> Result<Seed, ConfigError> {
        match &self.seed_path {
            Some(path) => {
                info!(path = %path.display(), "loading seed file");
                Ok(Seed::load(path)?)
            }
            None => Ok(delhi_metro()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::RouteStrategy;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert!(config.seed_path.is_none());
        assert_eq!(config.planner.strategy, RouteStrategy::DepthFirst);
        assert_eq!(config.load_seed().unwrap(), delhi_metro());
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config =
            AppConfig::from_lookup(lookup(&[(SEED_FILE_VAR, ""), (STRATEGY_VAR, "  ")])).unwrap();

        assert!(config.seed_path.is_none());
        assert_eq!(config.planner.strategy, RouteStrategy::DepthFirst);
    }

    #[test]
    fn strategy_from_env() {
        let config = AppConfig::from_lookup(lookup(&[(STRATEGY_VAR, "relaxation")])).unwrap();
        assert_eq!(config.planner.strategy, RouteStrategy::Relaxation);
    }

    #[test]
    fn bad_strategy_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[(STRATEGY_VAR, "teleport")])).unwrap_err();
        assert!(matches!(err, ConfigError::Strategy { .. }));
        assert!(err.to_string().starts_with("METRO_ROUTE_STRATEGY: "));
    }

    #[test]
    fn seed_file_from_env() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(
            &path,
            r#"{ "stations": ["Saket~Y"], "connections": [] }"#,
        )
        .unwrap();

        let path_str = path.to_str().unwrap();
        let config = AppConfig::from_lookup(lookup(&[(SEED_FILE_VAR, path_str)])).unwrap();
        assert_eq!(config.seed_path.as_deref(), Some(path.as_path()));

        let seed = config.load_seed().unwrap();
        assert_eq!(seed.stations.len(), 1);
    }

    #[test]
    fn missing_seed_file_is_an_error() {
        let config =
            AppConfig::from_lookup(lookup(&[(SEED_FILE_VAR, "/nonexistent/seed.json")])).unwrap();
        assert!(matches!(
            config.load_seed(),
            Err(ConfigError::Seed(SeedError::Io { .. }))
        ));
    }
}
