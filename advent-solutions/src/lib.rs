//! Puzzle solutions for the 2023 and 2025 events
//!
//! Solutions are organized by year, one module per day, on top of a shared
//! [`utils`] layer. Every solver is registered in [`registry`], the single
//! place that decides which (year, day) maps to which solver.

pub mod utils;
pub mod year_2023;
pub mod year_2025;

use advent_solver::{RegistrationError, RegistryBuilder, SolverRegistry};

/// Build the registry holding every implemented day of both events.
///
/// ```
/// let registry = advent_solutions::registry().unwrap();
/// assert!(registry.contains(2023, 25));
/// assert_eq!(registry.latest_year(), Some(2025));
///
/// let mut solver = registry.create_solver(2025, 3, "987654321111111\n").unwrap();
/// assert_eq!(solver.solve_part1().unwrap().answer, "98");
/// ```
pub fn registry() -> Result<SolverRegistry, RegistrationError> {
    let builder = RegistryBuilder::new()
        .register::<year_2023::day_1::Solver>(2023, 1)?
        .register::<year_2023::day_4::Solver>(2023, 4)?
        .register::<year_2023::day_6::Solver>(2023, 6)?
        .register::<year_2023::day_8::Solver>(2023, 8)?
        .register::<year_2023::day_9::Solver>(2023, 9)?
        .register::<year_2023::day_10::Solver>(2023, 10)?
        .register::<year_2023::day_14::Solver>(2023, 14)?
        .register::<year_2023::day_17::Solver>(2023, 17)?
        .register::<year_2023::day_22::Solver>(2023, 22)?
        .register::<year_2023::day_23::Solver>(2023, 23)?
        .register::<year_2023::day_25::Solver>(2023, 25)?
        .register::<year_2025::day_1::Solver>(2025, 1)?
        .register::<year_2025::day_2::Solver>(2025, 2)?
        .register::<year_2025::day_3::Solver>(2025, 3)?
        .register::<year_2025::day_4::Solver>(2025, 4)?
        .register::<year_2025::day_5::Solver>(2025, 5)?
        .register::<year_2025::day_8::Solver>(2025, 8)?
        .register::<year_2025::day_11::Solver>(2025, 11)?;
    Ok(builder.build())
}
