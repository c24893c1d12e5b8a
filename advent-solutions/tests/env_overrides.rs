//! Environment overrides read while binding a solver
//!
//! Kept in its own test binary with a single test, so no other test reads
//! `PAIRS` while it is being changed.

use advent_solver::{ParseError, SolverError};
use indoc::indoc;

const BOXES: &str = indoc! {"
    162,817,812
    57,618,57
    906,360,560
    592,479,940
    352,342,300
    466,668,158
    542,29,236
    431,825,988
    739,650,466
    52,470,668
    216,146,977
    819,987,18
    117,168,530
    805,96,715
    346,949,466
    970,615,88
    941,993,340
    862,61,35
    984,92,344
    425,690,689
"};

#[test]
fn test_pairs_override() {
    let registry = advent_solutions::registry().unwrap();

    unsafe { std::env::set_var("PAIRS", "lots") };
    let result = registry.create_solver(2025, 8, BOXES);
    assert!(matches!(
        result,
        Err(SolverError::Parse(ParseError::InvalidFormat(ref msg))) if msg.contains("PAIRS")
    ));

    unsafe { std::env::set_var("PAIRS", " 10 ") };
    let mut solver = registry.create_solver(2025, 8, BOXES).unwrap();
    assert_eq!(solver.solve_part1().unwrap().answer, "40");
    assert_eq!(solver.solve_part2().unwrap().answer, "25272");

    unsafe { std::env::remove_var("PAIRS") };
    let mut solver = registry.create_solver(2025, 8, BOXES).unwrap();
    assert_eq!(solver.solve_part2().unwrap().answer, "25272");
}
