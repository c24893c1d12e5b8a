//! Command-line entry point: `advent [OPTIONS] <DAY> <PART> [INPUT]`

mod cli;
mod config;
mod error;
mod input;
mod output;

use advent_solver::{SolverError, SolverRegistry};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use output::OutputFormatter;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (warnings only by default)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let registry = advent_solutions::registry()?;
    let config = Config::from_args(args, &registry)?;
    debug!(?config, "resolved configuration");

    if !registry.contains(config.year, config.day) {
        return Err(SolverError::NotFound(config.year, config.day).into());
    }
    let input = config.input.read()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.thread_count)
        .build()?;
    pool.install(|| solve(&registry, &config, &input))
}

fn solve(registry: &SolverRegistry, config: &Config, input: &str) -> Result<(), CliError> {
    let mut solver = registry.create_solver(config.year, config.day, input)?;
    let result = solver.solve(config.part)?;

    OutputFormatter::new(config.verbose).print_result(&*solver, config.part, &result);
    Ok(())
}
