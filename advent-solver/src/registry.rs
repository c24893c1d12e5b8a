//! Solver registry for looking up and binding solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::SolverExt;
use tracing::{debug, trace};

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Base year (first year of the puzzle event)
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Calculate flat index from year/day, returning None if out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

/// Reconstruct year/day from flat index
#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

// ============================================================================
// Factory Types
// ============================================================================

/// Thread-safe factory function that binds an input to a fresh solver
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FactoryInfo {
    /// The event year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

fn bind<'a, S: SolverExt + 'static>(
    year: u16,
    day: u8,
    input: &'a str,
) -> Result<Box<dyn DynSolver + 'a>, ParseError> {
    Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
}

/// Builder for constructing a [`SolverRegistry`]
///
/// Every solver is registered explicitly, in one place, before the registry
/// is frozen. Registering the same year-day twice is an error rather than a
/// silent overwrite.
///
/// # Example
///
/// ```
/// use advent_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register::<Echo>(2023, 1)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2023, 1, " hi ").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hi");
/// assert!(registry.create_solver(2023, 2, "").is_err());
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register solver type `S` for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Duplicate or out-of-range year-day
    pub fn register<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: SolverExt + 'static,
    {
        self.register_factory(year, day, S::PARTS, move |input| bind::<S>(year, day, input))
    }

    /// Register a solver factory with explicit parts count
    ///
    /// Returns error if year/day is out of bounds or already registered.
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        trace!(year, day, parts, "registered solver");
        self.entries[index] = Some(SolverFactoryEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        let registry = SolverRegistry {
            entries: self.entries,
        };
        debug!(solvers = registry.len(), "registry built");
        registry
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry mapping (year, day) to solver factories
///
/// Uses a flat Vec with index math for O(1) lookup.
pub struct SolverRegistry {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverRegistry {
    /// Bind `input` to the solver registered for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError::NotFound)` - Nothing registered for this year-day
    /// * `Err(SolverError::Parse)` - The input did not parse
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = calc_index(year, day)
            .and_then(|i| self.entries[i].as_ref())
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::Parse)
    }

    /// Get metadata for a specific solver
    pub fn info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        calc_index(year, day)
            .and_then(|i| self.entries[i].as_ref())
            .map(|e| FactoryInfo {
                year,
                day,
                parts: e.parts,
            })
    }

    /// Check if a solver exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.info(year, day).is_some()
    }

    /// Iterate over metadata for all registered solvers, ordered by year then day
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                FactoryInfo {
                    year,
                    day,
                    parts: e.parts,
                }
            })
        })
    }

    /// Distinct years with at least one registered solver, ascending
    pub fn years(&self) -> Vec<u16> {
        let mut years: Vec<u16> = self.iter_info().map(|info| info.year).collect();
        years.dedup();
        years
    }

    /// The most recent year with at least one registered solver
    pub fn latest_year(&self) -> Option<u16> {
        self.iter_info().last().map(|info| info.year)
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}
