use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::grid::{Direction, Grid, Pos};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// The traced loop, as the sequence of tiles visited from the start.
pub struct PipeLoop {
    tiles: Vec<Pos>,
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid = Grid::parse_bytes(input)?;
        if grid.find(|&c| c == b'S').is_none() {
            return Err(ParseError::MissingData("start tile 'S'".into()));
        }
        Ok(grid)
    }
}

fn opens(tile: u8, dir: Direction) -> bool {
    use Direction::*;
    matches!(
        (tile, dir),
        (b'|', North | South)
            | (b'-', East | West)
            | (b'L', North | East)
            | (b'J', North | West)
            | (b'7', South | West)
            | (b'F', South | East)
    )
}

fn no_loop() -> SolveError {
    SolveError::logic("no loop found")
}

fn trace_loop(grid: &Grid<u8>) -> Result<PipeLoop, SolveError> {
    let start = grid.find(|&c| c == b'S').ok_or_else(no_loop)?;

    // The start tile connects wherever a neighbour points back at it.
    let exits: Vec<Direction> = grid
        .neighbours4(start)
        .filter(|&(dir, next)| opens(grid[next], dir.flip()))
        .map(|(dir, _)| dir)
        .collect();
    let &[mut dir, _] = exits.as_slice() else {
        return Err(no_loop());
    };

    let mut tiles = vec![start];
    let mut pos = start;
    loop {
        pos = grid.step(pos, dir).ok_or_else(no_loop)?;
        if pos == start {
            break;
        }
        let tile = grid[pos];
        let came_from = dir.flip();
        if !opens(tile, came_from) {
            return Err(no_loop());
        }
        dir = Direction::ALL
            .into_iter()
            .find(|&d| d != came_from && opens(tile, d))
            .ok_or_else(no_loop)?;
        tiles.push(pos);
        if tiles.len() > grid.width() * grid.height() {
            return Err(no_loop());
        }
    }

    Ok(PipeLoop { tiles })
}

impl PipeLoop {
    fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Tiles strictly inside the loop.
    ///
    /// Shoelace gives the polygon area through tile centres, and Pick's
    /// theorem turns that area and the boundary count into interior points.
    fn enclosed(&self) -> i64 {
        let twice_area: i64 = self
            .tiles
            .iter()
            .zip(self.tiles.iter().cycle().skip(1))
            .map(|(a, b)| a.col as i64 * b.row as i64 - b.col as i64 * a.row as i64)
            .sum();
        twice_area.abs() / 2 - self.len() as i64 / 2 + 1
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok((trace_loop(shared)?.len() / 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(trace_loop(shared)?.enclosed().to_string())
    }
}
