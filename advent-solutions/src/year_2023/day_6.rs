use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use num::integer::Roots;

use crate::utils::parsing::{lines_nonempty, parse_ints};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// Each race as `(time, record distance)`, plus the single long race read
/// by ignoring the spaces between digits.
#[derive(Debug, PartialEq, Eq)]
pub struct Races {
    races: Vec<(i64, i64)>,
    joined: (i64, i64),
}

impl AocParser for Solver {
    type SharedData<'a> = Races;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut lines = lines_nonempty(input);
        let mut field = |name: &str| {
            lines
                .next()
                .and_then(|line| line.strip_prefix(name))
                .and_then(|line| line.strip_prefix(':'))
                .ok_or_else(|| ParseError::MissingData(format!("{name} line")))
        };
        let times = field("Time")?;
        let distances = field("Distance")?;

        let time_values: Vec<i64> = parse_ints(times)?;
        let distance_values: Vec<i64> = parse_ints(distances)?;
        if time_values.len() != distance_values.len() {
            return Err(ParseError::invalid(
                "race times and distances differ in count",
            ));
        }

        Ok(Races {
            races: time_values.into_iter().zip(distance_values).collect(),
            joined: (join_digits(times)?, join_digits(distances)?),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: i64 = shared
            .races
            .iter()
            .map(|&(t, d)| ways_to_win(t, d))
            .product();
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (time, distance) = shared.joined;
        Ok(ways_to_win(time, distance).to_string())
    }
}

/// Read a line of numbers as one number, ignoring the spaces between them.
fn join_digits(line: &str) -> Result<i64, ParseError> {
    let digits: String = line.split_whitespace().collect();
    digits.parse().map_err(|_| ParseError::number(digits))
}

/// Count hold times `h` in `0..=t` with `h * (t - h) > d`.
///
/// The winning holds form an interval symmetric around `t / 2`; its lower
/// end is located from the integer square root of the discriminant and then
/// nudged onto the exact boundary.
fn ways_to_win(t: i64, d: i64) -> i64 {
    let discriminant = t * t - 4 * d;
    if discriminant <= 0 {
        return 0;
    }
    let mut lo = (t - discriminant.sqrt()) / 2;
    while lo <= t / 2 && lo * (t - lo) <= d {
        lo += 1;
    }
    (t - 2 * lo + 1).max(0)
}
