use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::parsing::{lines_nonempty, parse_ints};
use crate::utils::set::Set;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    /// Winning numbers held, per card.
    type SharedData<'a> = Vec<usize>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        lines_nonempty(input).map(parse_card).collect()
    }
}

fn parse_card(line: &str) -> Result<usize, ParseError> {
    let (_, numbers) = line
        .split_once(':')
        .ok_or_else(|| ParseError::invalid(format!("missing card header in {line:?}")))?;
    let (winning, held) = numbers
        .split_once('|')
        .ok_or_else(|| ParseError::invalid(format!("missing '|' in {line:?}")))?;

    let winning: Set<u32> = parse_ints(winning)?.into_iter().collect();
    let held: Set<u32> = parse_ints(held)?.into_iter().collect();
    Ok(held.count_common(&winning))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let points: u64 = shared
            .iter()
            .filter(|&&matches| matches > 0)
            .map(|&matches| 1 << (matches - 1))
            .sum();
        Ok(points.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let cards = shared.len();
        let mut copies = vec![1u64; cards];
        for (card, &matches) in shared.iter().enumerate() {
            let last = (card + matches).min(cards - 1);
            for next in card + 1..=last {
                copies[next] += copies[card];
            }
        }
        Ok(copies.iter().sum::<u64>().to_string())
    }
}
