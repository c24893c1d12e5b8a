//! Error types for the CLI

use advent_solver::{RegistrationError, SolveError, SolverError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read input {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("Failed to start thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
