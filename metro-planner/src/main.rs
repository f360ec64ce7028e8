use std::io;
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use metro_planner::config::AppConfig;
use metro_planner::console::Console;
use metro_planner::graph::StationGraph;
use metro_planner::planner::Planner;

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    let seed = config.load_seed()?;

    let graph = StationGraph::from_seed(&seed);
    info!(
        stations = graph.vertex_count(),
        connections = graph.edge_count(),
        strategy = %config.planner.strategy,
        "station graph ready"
    );

    let planner = Planner::new(&graph, &config.planner);
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Console::new(planner, stdin, stdout).run()?;

    Ok(())
}
