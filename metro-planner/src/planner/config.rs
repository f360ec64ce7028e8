//! Cost, fare and search configuration for the route planner.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;

use crate::domain::CostMode;

/// How travel time is derived from distance.
///
/// Each hop costs a fixed dwell/boarding overhead plus a per-kilometre
/// running time. Both are in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostModel {
    /// Fixed overhead per hop (seconds).
    pub dwell_secs: u64,

    /// Running time per kilometre (seconds).
    pub secs_per_km: u64,
}

impl CostModel {
    /// Create a cost model with the given parameters.
    pub fn new(dwell_secs: u64, secs_per_km: u64) -> Self {
        Self {
            dwell_secs,
            secs_per_km,
        }
    }

    /// Cost of traversing one edge of `km` kilometres.
    pub fn edge_cost(&self, km: u32, mode: CostMode) -> u64 {
        match mode {
            CostMode::Distance => u64::from(km),
            CostMode::Time => self.dwell_secs + self.secs_per_km * u64::from(km),
        }
    }

    /// Returns the per-hop overhead as a Duration.
    pub fn dwell(&self) -> Duration {
        Duration::seconds(self.dwell_secs as i64)
    }

    /// Returns the running time per kilometre as a Duration.
    pub fn per_km(&self) -> Duration {
        Duration::seconds(self.secs_per_km as i64)
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            dwell_secs: 120, // 2 minutes per station
            secs_per_km: 40,
        }
    }
}

/// One step of the fare schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FareTier {
    /// Highest station count this tier covers (inclusive).
    pub max_stations: usize,

    /// Fare for this tier (rupees).
    pub fare: u32,
}

/// Station-count based fare schedule.
///
/// Tiers must be sorted by `max_stations`. Trips longer than the last tier
/// pay the last tier's fare plus `per_extra_station` for each station
/// beyond it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareTable {
    tiers: Vec<FareTier>,
    per_extra_station: u32,
}

impl FareTable {
    /// Create a fare table. Tiers are sorted by station count.
    pub fn new(mut tiers: Vec<FareTier>, per_extra_station: u32) -> Self {
        tiers.sort_by_key(|t| t.max_stations);
        Self {
            tiers,
            per_extra_station,
        }
    }

    /// Returns the tiers, smallest first.
    pub fn tiers(&self) -> &[FareTier] {
        &self.tiers
    }

    /// Fare for a trip of `stations` stations.
    pub fn fare_for(&self, stations: usize) -> u32 {
        if let Some(tier) = self.tiers.iter().find(|t| stations <= t.max_stations) {
            return tier.fare;
        }

        match self.tiers.last() {
            Some(last) => {
                let extra = (stations - last.max_stations) as u32;
                last.fare + extra * self.per_extra_station
            }
            None => stations as u32 * self.per_extra_station,
        }
    }
}

impl Default for FareTable {
    fn default() -> Self {
        Self::new(
            vec![
                FareTier {
                    max_stations: 3,
                    fare: 10,
                },
                FareTier {
                    max_stations: 7,
                    fare: 20,
                },
                FareTier {
                    max_stations: 11,
                    fare: 30,
                },
                FareTier {
                    max_stations: 20,
                    fare: 40,
                },
            ],
            10,
        )
    }
}

/// Error returned when parsing an unknown route strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route strategy {0:?} (expected \"dfs\" or \"relaxation\")")]
pub struct InvalidRouteStrategy(String);

/// How routes (stop sequences) are recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteStrategy {
    /// Exhaustive depth-first search that marks stations as processed when
    /// they are popped and keeps the best completed route. Can miss a
    /// cheaper route through a station that was already popped via another
    /// path.
    #[default]
    DepthFirst,

    /// Priority relaxation with predecessor tracking. Always optimal.
    Relaxation,
}

impl FromStr for RouteStrategy {
    type Err = InvalidRouteStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(RouteStrategy::DepthFirst),
            "relaxation" | "dijkstra" => Ok(RouteStrategy::Relaxation),
            other => Err(InvalidRouteStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for RouteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteStrategy::DepthFirst => f.write_str("dfs"),
            RouteStrategy::Relaxation => f.write_str("relaxation"),
        }
    }
}

/// Configuration parameters for route planning.
#[derive(Debug, Clone, Default)]
pub struct PlannerConfig {
    /// Time-cost model.
    pub cost_model: CostModel,

    /// Fare schedule.
    pub fares: FareTable,

    /// Route recovery strategy.
    pub strategy: RouteStrategy,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(cost_model: CostModel, fares: FareTable, strategy: RouteStrategy) -> Self {
        Self {
            cost_model,
            fares,
            strategy,
        }
    }

    /// Returns a copy of this configuration using `strategy`.
    pub fn with_strategy(mut self, strategy: RouteStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
