//! Property-based tests for solver part bounds validation

use advent_solver::{
    AocParser, DynSolver, ParseError, SolveError, Solver, SolverExt, SolverInstance,
};
use proptest::prelude::*;

/// Test solver with configurable PARTS
struct TestSolver<const N: u8>;

impl<const N: u8> AocParser for TestSolver<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for TestSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

fn checked(max_parts: u8, part: u8) -> (u8, Result<String, SolveError>) {
    match max_parts {
        1 => (1, TestSolver::<1>::solve_part_checked_range(&mut (), part)),
        3 => (3, TestSolver::<3>::solve_part_checked_range(&mut (), part)),
        _ => (2, TestSolver::<2>::solve_part_checked_range(&mut (), part)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Part 0 and parts above PARTS are rejected before dispatch.
    #[test]
    fn prop_out_of_range_rejection(max_parts in 1u8..=3, part in 0u8..=255) {
        let (effective_max, result) = checked(max_parts, part);

        if part == 0 || part > effective_max {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{}", part));
        }
    }

    /// A bound instance applies the same range check.
    #[test]
    fn prop_instance_checks_range(part in 0u8..=255) {
        let mut instance = SolverInstance::<TestSolver<2>>::new(2023, 5, "").unwrap();
        let result = instance.solve(part);

        if (1..=2).contains(&part) {
            prop_assert_eq!(result.unwrap().answer, format!("part{}", part));
        } else {
            prop_assert!(matches!(result, Err(SolveError::PartOutOfRange(p)) if p == part));
        }
    }
}

#[test]
fn test_instance_metadata_and_timing() {
    let mut instance = SolverInstance::<TestSolver<2>>::new(2025, 11, "ignored").unwrap();

    assert_eq!(instance.year(), 2025);
    assert_eq!(instance.day(), 11);
    assert_eq!(instance.parts(), 2);
    assert!(instance.parse_timing().end >= instance.parse_timing().start);
    assert!(instance.parse_duration() >= chrono::TimeDelta::zero());

    let result = instance.solve_part2().unwrap();
    assert_eq!(result.answer, "part2");
    assert!(result.duration() >= chrono::TimeDelta::zero());
}
