//! Metro route planner.
//!
//! Answers distance, travel time, route and fare queries over a weighted,
//! undirected graph of metro stations, where each station is served by one
//! or more lines.

pub mod config;
pub mod console;
pub mod domain;
pub mod graph;
pub mod planner;
pub mod seed;
