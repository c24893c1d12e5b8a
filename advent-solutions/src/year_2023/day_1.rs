use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::parsing::lines_nonempty;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const SPELLED: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let lines: Vec<&str> = lines_nonempty(input).collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("no calibration lines".into()));
        }
        Ok(lines)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibration_sum(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibration_sum(shared, true)
    }
}

/// Digit starting at byte `i`, optionally accepting spelled-out digits.
/// Spelled digits may overlap, as in `eightwo`.
fn digit_at(line: &[u8], i: usize, spelled: bool) -> Option<u32> {
    if line[i].is_ascii_digit() {
        return Some(u32::from(line[i] - b'0'));
    }
    if !spelled {
        return None;
    }
    SPELLED
        .iter()
        .position(|word| line[i..].starts_with(word.as_bytes()))
        .map(|idx| idx as u32 + 1)
}

fn calibration_sum(lines: &[&str], spelled: bool) -> Result<String, SolveError> {
    let mut total = 0;
    for (n, line) in lines.iter().enumerate() {
        let bytes = line.as_bytes();
        let first = (0..bytes.len()).find_map(|i| digit_at(bytes, i, spelled));
        let last = (0..bytes.len()).rev().find_map(|i| digit_at(bytes, i, spelled));
        match (first, last) {
            (Some(first), Some(last)) => total += first * 10 + last,
            _ => {
                return Err(SolveError::logic(format!(
                    "line {} has no digit: {line:?}",
                    n + 1
                )));
            }
        }
    }
    Ok(total.to_string())
}
