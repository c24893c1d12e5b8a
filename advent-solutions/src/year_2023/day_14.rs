use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::utils::grid::{Direction, Grid, Pos};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const SPIN_CYCLES: usize = 1_000_000_000;
const SPIN_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::West,
    Direction::South,
    Direction::East,
];

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse_with(input, |c| match c {
            'O' | '#' | '.' => Ok(c as u8),
            other => Err(ParseError::invalid(format!("unexpected tile {other:?}"))),
        })
    }
}

/// Position `i` along `lane`, counted from the edge that rocks roll towards.
fn lane_pos(grid: &Grid<u8>, dir: Direction, lane: usize, i: usize) -> Pos {
    match dir {
        Direction::North => Pos::new(i, lane),
        Direction::South => Pos::new(grid.height() - 1 - i, lane),
        Direction::West => Pos::new(lane, i),
        Direction::East => Pos::new(lane, grid.width() - 1 - i),
    }
}

fn tilt(grid: &mut Grid<u8>, dir: Direction) {
    let (lanes, len) = match dir {
        Direction::North | Direction::South => (grid.width(), grid.height()),
        Direction::East | Direction::West => (grid.height(), grid.width()),
    };
    for lane in 0..lanes {
        let mut free = 0;
        for i in 0..len {
            let pos = lane_pos(grid, dir, lane, i);
            match grid[pos] {
                b'#' => free = i + 1,
                b'O' => {
                    grid[pos] = b'.';
                    let dest = lane_pos(grid, dir, lane, free);
                    grid[dest] = b'O';
                    free += 1;
                }
                _ => {}
            }
        }
    }
}

fn north_load(grid: &Grid<u8>) -> usize {
    grid.positions()
        .filter(|&pos| grid[pos] == b'O')
        .map(|pos| grid.height() - pos.row)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut grid = shared.clone();
        tilt(&mut grid, Direction::North);
        Ok(north_load(&grid).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut grid = shared.clone();
        let mut seen: FxHashMap<String, usize> = FxHashMap::default();

        let mut done = 0;
        while done < SPIN_CYCLES {
            if let Some(first) = seen.insert(grid.render(), done) {
                let period = done - first;
                debug!(first, period, "spin cycle repeats");
                let remaining = (SPIN_CYCLES - done) % period;
                for _ in 0..remaining {
                    spin(&mut grid);
                }
                break;
            }
            spin(&mut grid);
            done += 1;
        }

        Ok(north_load(&grid).to_string())
    }
}

fn spin(grid: &mut Grid<u8>) {
    for dir in SPIN_ORDER {
        tilt(grid, dir);
    }
}
