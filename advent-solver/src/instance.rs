//! Bound solver instances and their timing

use crate::error::{ParseError, SolveError};
use crate::solver::SolverExt;
use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

/// Wall-clock start and end of one measured phase (parse or solve)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Timing {
    /// Run `f`, recording when it started and finished
    fn measure<T>(f: impl FnOnce() -> T) -> (T, Timing) {
        let start = Utc::now();
        let value = f();
        let end = Utc::now();
        (value, Timing { start, end })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// An answer together with how long it took to compute
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub timing: Timing,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.timing.duration()
    }
}

/// A solver bound to one puzzle input.
///
/// Binding parses the input once; both parts then work from the same
/// shared data.
pub struct SolverInstance<'a, S: SolverExt> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_timing: Timing,
}

impl<'a, S: SolverExt> SolverInstance<'a, S> {
    /// Parse `input` and bind it to solver `S` under the given year and day
    ///
    /// # Returns
    /// * `Ok(SolverInstance)` - Parsed instance, ready to solve either part
    /// * `Err(ParseError)` - The input did not parse; nothing is bound
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_timing) = Timing::measure(|| S::parse(input));
        let shared = shared?;
        debug!(
            year,
            day,
            elapsed_us = ?parse_timing.duration().num_microseconds(),
            "parsed input"
        );

        Ok(Self {
            year,
            day,
            shared,
            parse_timing,
        })
    }
}

/// Object-safe view of a bound solver, as handed out by the registry
///
/// # Example
///
/// ```no_run
/// use advent_solver::DynSolver;
///
/// fn report(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("part {part}: {} in {}", result.answer, result.duration());
///     }
///     println!("parsed in {}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part with timing
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The answer and how long it took
    /// * `Err(SolveError)` - The part is out of range, not implemented, or solving failed
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// When parsing started and finished
    fn parse_timing(&self) -> Timing;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_timing().duration()
    }

    fn solve_part1(&mut self) -> Result<SolveResult, SolveError> {
        self.solve(1)
    }

    fn solve_part2(&mut self) -> Result<SolveResult, SolveError> {
        self.solve(2)
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, timing) =
            Timing::measure(|| S::solve_part_checked_range(&mut self.shared, part));
        let answer = answer?;
        debug!(
            year = self.year,
            day = self.day,
            part,
            elapsed_us = ?timing.duration().num_microseconds(),
            "solved part"
        );

        Ok(SolveResult { answer, timing })
    }

    fn parse_timing(&self) -> Timing {
        self.parse_timing
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
