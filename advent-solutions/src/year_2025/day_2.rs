use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use rayon::prelude::*;
use std::ops::RangeInclusive;

use crate::utils::parsing::parse_ints;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<RangeInclusive<u64>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|range| match parse_ints::<u64>(range)?.as_slice() {
                &[lo, hi] if lo <= hi => Ok(lo..=hi),
                _ => Err(ParseError::invalid(format!("bad id range {range:?}"))),
            })
            .collect()
    }
}

/// Whether the decimal digits of `id` are one block repeated `reps` times.
fn repeats(digits: &[u8], reps: usize) -> bool {
    digits.len() % reps == 0 && {
        let block = digits.len() / reps;
        digits.chunks(block).all(|chunk| chunk == &digits[..block])
    }
}

fn invalid_id_sum(ranges: &[RangeInclusive<u64>], is_invalid: impl Fn(&[u8]) -> bool + Sync) -> u64 {
    ranges
        .par_iter()
        .flat_map_iter(|range| range.clone())
        .filter(|id| is_invalid(id.to_string().as_bytes()))
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(invalid_id_sum(shared, |digits| repeats(digits, 2)).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = invalid_id_sum(shared, |digits| (2..=digits.len()).any(|reps| repeats(digits, reps)));
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    const EXAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
        1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
        824824821-824824827,2121212118-2121212124\n";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.len(), 11);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1227775554");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "4174379265");
    }

    #[test]
    fn test_repeats() {
        assert!(repeats(b"6464", 2));
        assert!(!repeats(b"6464", 4));
        assert!(repeats(b"111", 3));
        assert!(!repeats(b"101", 2));
    }

    #[test]
    fn test_bad_range() {
        assert!(Solver::parse("5-3").is_err());
        assert!(Solver::parse("1-2-3").is_err());
    }
}
