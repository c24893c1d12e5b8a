//! Puzzle Solver Library
//!
//! A small, type-safe framework for daily two-part puzzles. Each day is a
//! solver with its own input parsing and two answers; solvers are registered
//! explicitly under a (year, day) key and looked up through an immutable
//! registry.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers ([`AocParser`], [`PartSolver`], [`Solver`])
//! - A derive macro that generates the part dispatch ([`AocSolver`])
//! - Type-erased, bound solver instances with parse and solve timing ([`DynSolver`])
//! - A registry builder that rejects duplicate registrations ([`RegistryBuilder`])
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct Day1;
//!
//! impl AocParser for Day1 {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::number(l)))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i64>().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register::<Day1>(2023, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve_part1().unwrap().answer, "6");
//! assert_eq!(solver.solve_part2().unwrap().answer, "6");
//! ```
//!
//! # Part Sharing
//!
//! Both parts receive `&mut SharedData`. Independent parts simply read it;
//! parts that share an expensive intermediate result can cache it in the
//! shared data (for example behind an `Option` filled on first use).

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance, Timing};
pub use registry::{FactoryInfo, RegistryBuilder, SolverFactory, SolverRegistry};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export the derive macro
pub use advent_solver_macros::AocSolver;
