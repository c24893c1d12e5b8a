use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::utils::grid::{Direction, Grid, Pos};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse_with(input, |c| {
            c.to_digit(10)
                .filter(|&d| d > 0)
                .ok_or_else(|| ParseError::number(c))
        })
    }
}

/// Least heat loss from the top-left to the bottom-right block when every
/// straight run is between `min_run` and `max_run` blocks long.
///
/// Dijkstra over (block, direction of arrival). Each edge is a whole run
/// followed by a mandatory turn, so run length never needs to be part of
/// the state.
fn least_heat_loss(grid: &Grid<u32>, min_run: usize, max_run: usize) -> Result<u32, SolveError> {
    let start = Pos::new(0, 0);
    let target = Pos::new(grid.height() - 1, grid.width() - 1);

    let mut best: FxHashMap<(Pos, Direction), u32> = FxHashMap::default();
    let mut queue = BinaryHeap::new();
    for dir in [Direction::East, Direction::South] {
        best.insert((start, dir), 0);
        queue.push(Reverse((0, start, dir)));
    }

    while let Some(Reverse((loss, pos, arrived))) = queue.pop() {
        if pos == target {
            return Ok(loss);
        }
        if best.get(&(pos, arrived)).is_some_and(|&b| b < loss) {
            continue;
        }

        for dir in [arrived.turn_left(), arrived.turn_right()] {
            let mut next = pos;
            let mut next_loss = loss;
            for run in 1..=max_run {
                let Some(stepped) = grid.step(next, dir) else {
                    break;
                };
                next = stepped;
                next_loss += grid[next];
                if run < min_run {
                    continue;
                }
                let entry = best.entry((next, dir)).or_insert(u32::MAX);
                if next_loss < *entry {
                    *entry = next_loss;
                    queue.push(Reverse((next_loss, next, dir)));
                }
            }
        }
    }

    Err(SolveError::logic("the factory cannot be reached"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(least_heat_loss(shared, 1, 3)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(least_heat_loss(shared, 4, 10)?.to_string())
    }
}
