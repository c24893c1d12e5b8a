use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::parsing::{lines_nonempty, parse_ints_with};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        // Readings can be negative, so only whitespace separates them.
        lines_nonempty(input)
            .enumerate()
            .map(|(n, line)| {
                let values = parse_ints_with(line, &[' ', '\t'])?;
                if values.is_empty() {
                    return Err(ParseError::MissingData(format!("line {} is empty", n + 1)));
                }
                Ok(values)
            })
            .collect()
    }
}

/// Value following `seq`, by repeated differencing.
fn extrapolate(seq: &[i64]) -> i64 {
    if seq.iter().all(|&v| v == 0) {
        return 0;
    }
    let diffs: Vec<i64> = seq.windows(2).map(|w| w[1] - w[0]).collect();
    seq[seq.len() - 1] + extrapolate(&diffs)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|seq| extrapolate(seq)).sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Extrapolating backwards is extrapolating the reversed sequence.
        let total: i64 = shared
            .iter()
            .map(|seq| {
                let reversed: Vec<i64> = seq.iter().rev().copied().collect();
                extrapolate(&reversed)
            })
            .sum();
        Ok(total.to_string())
    }
}
