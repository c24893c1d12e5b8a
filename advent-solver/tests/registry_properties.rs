//! Tests for explicit registration and lookup

use advent_solver::{
    AocParser, AocSolver, FactoryInfo, ParseError, PartSolver, RegistrationError,
    RegistryBuilder, SolveError, SolverError, SolverRegistry,
};
use proptest::prelude::*;

/// Sums the digits of every line; part 2 doubles the result.
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct DigitSum;

impl AocParser for DigitSum {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.chars()
                    .map(|c| c.to_digit(10).ok_or_else(|| ParseError::number(line)))
                    .sum::<Result<u32, _>>()
            })
            .collect()
    }
}

impl PartSolver<1> for DigitSum {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<u32>().to_string())
    }
}

impl PartSolver<2> for DigitSum {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok((shared.iter().sum::<u32>() * 2).to_string())
    }
}

fn registry() -> SolverRegistry {
    RegistryBuilder::new()
        .register::<DigitSum>(2025, 3)
        .and_then(|b| b.register::<DigitSum>(2023, 1))
        .and_then(|b| b.register::<DigitSum>(2023, 25))
        .unwrap()
        .build()
}

#[test]
fn test_end_to_end_both_parts() {
    let registry = registry();
    let mut solver = registry.create_solver(2023, 1, "12\n345").unwrap();

    assert_eq!(solver.solve_part1().unwrap().answer, "15");
    assert_eq!(solver.solve_part2().unwrap().answer, "30");
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = RegistryBuilder::new()
        .register::<DigitSum>(2023, 1)
        .and_then(|b| b.register::<DigitSum>(2023, 1));

    assert_eq!(
        result.err(),
        Some(RegistrationError::DuplicateSolver(2023, 1))
    );
}

#[test]
fn test_invalid_year_day_rejected() {
    for (year, day) in [(2023, 0), (2023, 26), (1999, 1), (2040, 1)] {
        let result = RegistryBuilder::new().register::<DigitSum>(year, day);
        assert_eq!(
            result.err(),
            Some(RegistrationError::InvalidYearDay(year, day))
        );
    }
}

#[test]
fn test_parse_error_surfaces_from_create() {
    let registry = registry();
    let err = registry.create_solver(2023, 1, "12\n3a").err().unwrap();

    assert!(matches!(err, SolverError::Parse(ParseError::InvalidNumber { ref token }) if token == "3a"));
}

#[test]
fn test_metadata_ordering() {
    let registry = registry();

    let info: Vec<FactoryInfo> = registry.iter_info().collect();
    let keys: Vec<(u16, u8)> = info.iter().map(|i| (i.year, i.day)).collect();
    assert_eq!(keys, vec![(2023, 1), (2023, 25), (2025, 3)]);
    assert!(info.iter().all(|i| i.parts == 2));

    assert_eq!(registry.len(), 3);
    assert!(!registry.is_empty());
    assert_eq!(registry.years(), vec![2023, 2025]);
    assert_eq!(registry.latest_year(), Some(2025));
    assert!(registry.contains(2023, 25));
    assert!(!registry.contains(2025, 25));
}

#[test]
fn test_empty_registry() {
    let registry = RegistryBuilder::default().build();

    assert!(registry.is_empty());
    assert_eq!(registry.latest_year(), None);
    assert!(matches!(
        registry.create_solver(2023, 1, ""),
        Err(SolverError::NotFound(2023, 1))
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Lookup of anything not registered reports NotFound, including keys
    /// outside the storable range.
    #[test]
    fn prop_unregistered_lookup_is_not_found(year in 2000u16..2050, day in 0u8..=30) {
        prop_assume!(!matches!((year, day), (2023, 1) | (2023, 25) | (2025, 3)));
        let registry = registry();

        match registry.create_solver(year, day, "1") {
            Err(SolverError::NotFound(y, d)) => {
                prop_assert_eq!((y, d), (year, day));
            }
            Err(other) => prop_assert!(false, "unexpected error {}", other),
            Ok(_) => prop_assert!(false, "unexpected solver for {}/{}", year, day),
        }
    }
}
