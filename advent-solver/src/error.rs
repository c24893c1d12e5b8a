//! Error types for the solver library

use thiserror::Error;

/// Error type for parsing input data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// A token that should have been a number could not be parsed
    #[error("Invalid number {token:?}")]
    InvalidNumber { token: String },
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

impl ParseError {
    /// Shorthand for [`ParseError::InvalidFormat`]
    pub fn invalid(msg: impl Into<String>) -> Self {
        ParseError::InvalidFormat(msg.into())
    }

    /// Shorthand for [`ParseError::InvalidNumber`]
    pub fn number(token: impl Into<String>) -> Self {
        ParseError::InvalidNumber {
            token: token.into(),
        }
    }
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds PARTS)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The input parsed but does not satisfy the puzzle's preconditions
    #[error("Logic error: {0}")]
    Logic(String),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Shorthand for [`SolveError::Logic`]
    pub fn logic(msg: impl Into<String>) -> Self {
        SolveError::Logic(msg.into())
    }
}

impl From<ParseError> for SolveError {
    fn from(err: ParseError) -> Self {
        SolveError::SolveFailed(Box::new(err))
    }
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// Solver not found for the given year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Attempted to register a solver for a year-day combination that already exists
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year or day is outside the supported range
    #[error("Invalid year {0} or day {1}")]
    InvalidYearDay(u16, u8),
}
