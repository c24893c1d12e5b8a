//! Configuration resolved from CLI arguments and the registry

use crate::cli::Args;
use crate::error::CliError;
use crate::input::InputSource;
use advent_solver::SolverRegistry;

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub input: InputSource,
    pub thread_count: usize,
    pub verbose: bool,
}

impl Config {
    /// Resolve CLI arguments against the registry
    pub fn from_args(args: Args, registry: &SolverRegistry) -> Result<Self, CliError> {
        let year = match args.year {
            Some(year) => year,
            None => registry
                .latest_year()
                .ok_or_else(|| CliError::Config("no solvers are registered".to_string()))?,
        };

        let thread_count = args.threads.unwrap_or_else(num_cpus);
        if thread_count == 0 {
            return Err(CliError::Config(
                "--threads must be at least 1".to_string(),
            ));
        }

        let input = match args.input {
            Some(path) => InputSource::from_path(path),
            None => InputSource::default_for(year, args.day),
        };

        Ok(Config {
            year,
            day: args.day,
            part: args.part,
            input,
            thread_count,
            verbose: args.verbose,
        })
    }
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
