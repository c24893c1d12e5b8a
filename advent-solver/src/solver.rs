//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses a day's puzzle input into the data shared by its parts.
///
/// # Example
///
/// ```
/// use advent_solver::{AocParser, ParseError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::number(l)))
///             .collect()
///     }
/// }
///
/// assert_eq!(Day1::parse("1\n2").unwrap(), vec![1, 2]);
/// ```
pub trait AocParser {
    /// The shared data structure that holds parsed input and intermediate results.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or custom structs for owned data (simplest, supports mutation)
    /// - `&'a str` for zero-copy borrowed data when no transformation is needed
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implement once per part and derive [`AocSolver`](crate::AocSolver) to get
/// the [`Solver`] dispatch for free.
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part of the puzzle.
    ///
    /// Parts receive the shared data mutably so that one part can stash
    /// intermediate results for the other. A part must not leave the parsed
    /// input itself in a state the other part cannot start from.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Core trait that every day's solver implements.
///
/// # Example
///
/// ```
/// use advent_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Sums;
///
/// impl AocParser for Sums {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split_whitespace()
///             .map(|t| t.parse().map_err(|_| ParseError::number(t)))
///             .collect()
///     }
/// }
///
/// impl Solver for Sums {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i64>().to_string()),
///             2 => Ok(shared.iter().product::<i64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Sums::parse("2 3 4").unwrap();
/// assert_eq!(Sums::solve_part(&mut shared, 2).unwrap(), "24");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::Logic)` - The input violates the puzzle's preconditions
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked part dispatch, available on every [`Solver`].
pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
