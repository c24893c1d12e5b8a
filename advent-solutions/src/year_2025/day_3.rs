use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::parsing::lines_nonempty;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    /// Battery joltages, one bank per line.
    type SharedData<'a> = Vec<Vec<u8>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        lines_nonempty(input)
            .map(|line| {
                line.bytes()
                    .map(|b| match b {
                        b'1'..=b'9' => Ok(b - b'0'),
                        _ => Err(ParseError::number(line)),
                    })
                    .collect()
            })
            .collect()
    }
}

/// Largest number formed by switching on `count` batteries, keeping order.
///
/// Each digit is the leftmost maximum of the window that still leaves
/// enough batteries for the digits after it.
fn max_joltage(bank: &[u8], count: usize) -> Result<u64, SolveError> {
    if bank.len() < count {
        return Err(SolveError::logic(format!(
            "bank of {} batteries cannot switch on {count}",
            bank.len()
        )));
    }
    let mut joltage = 0;
    let mut from = 0;
    for remaining in (0..count).rev() {
        let window = &bank[from..bank.len() - remaining];
        let (offset, &digit) = window
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, d)| d)
            .ok_or_else(|| SolveError::logic("empty battery window"))?;
        joltage = joltage * 10 + u64::from(digit);
        from += offset + 1;
    }
    Ok(joltage)
}

fn total_joltage(banks: &[Vec<u8>], count: usize) -> Result<String, SolveError> {
    let mut total = 0;
    for bank in banks {
        total += max_joltage(bank, count)?;
    }
    Ok(total.to_string())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 2)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 12)
    }
}
