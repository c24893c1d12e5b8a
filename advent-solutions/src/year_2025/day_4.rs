use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::grid::{Grid, Pos};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// A forklift can reach a roll with fewer than this many neighbouring rolls.
const CROWDED: usize = 4;

impl AocParser for Solver {
    /// `true` where a paper roll sits.
    type SharedData<'a> = Grid<bool>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse_with(input, |c| match c {
            '@' => Ok(true),
            '.' => Ok(false),
            other => Err(ParseError::invalid(format!("unexpected cell {other:?}"))),
        })
    }
}

fn accessible(grid: &Grid<bool>) -> Vec<Pos> {
    grid.positions()
        .filter(|&pos| grid[pos])
        .filter(|&pos| grid.neighbours8(pos).filter(|&n| grid[n]).count() < CROWDED)
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(accessible(shared).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut grid = shared.clone();
        let mut removed = 0;
        loop {
            let round = accessible(&grid);
            if round.is_empty() {
                break;
            }
            removed += round.len();
            for pos in round {
                grid[pos] = false;
            }
        }
        Ok(removed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        ..@@.@@@@.
        @@@.@.@.@@
        @@@@@.@.@@
        @.@@@@..@.
        @@.@@@@.@@
        .@@@@@@@.@
        .@.@.@.@@@
        @.@@@.@@@@
        .@@@@@@@@.
        @.@.@@@.@.
    "};

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "43");
        assert_eq!(accessible(&shared).len(), 13);
    }
}
