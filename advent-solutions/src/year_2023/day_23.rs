use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::utils::grid::{Direction, Grid, Pos};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

pub struct Trails {
    grid: Grid<u8>,
    start: Pos,
    end: Pos,
}

impl AocParser for Solver {
    type SharedData<'a> = Trails;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid = Grid::parse_with(input, |c| match c {
            '#' | '.' | '^' | '>' | 'v' | '<' => Ok(c as u8),
            other => Err(ParseError::invalid(format!("unexpected tile {other:?}"))),
        })?;
        let opening = |row: usize| {
            (0..grid.width())
                .map(|col| Pos::new(row, col))
                .find(|&pos| grid[pos] == b'.')
                .ok_or_else(|| ParseError::MissingData(format!("opening in row {}", row + 1)))
        };
        let start = opening(0)?;
        let end = opening(grid.height() - 1)?;
        Ok(Trails { grid, start, end })
    }
}

fn slope(tile: u8) -> Option<Direction> {
    match tile {
        b'^' => Some(Direction::North),
        b'>' => Some(Direction::East),
        b'v' => Some(Direction::South),
        b'<' => Some(Direction::West),
        _ => None,
    }
}

/// Trail junctions joined by the corridor lengths between them.
struct TrailGraph {
    edges: Vec<Vec<(usize, usize)>>,
}

const START: usize = 0;
const END: usize = 1;

impl Trails {
    fn open_neighbours(&self, pos: Pos) -> impl Iterator<Item = (Direction, Pos)> + '_ {
        self.grid
            .neighbours4(pos)
            .filter(|&(_, next)| self.grid[next] != b'#')
    }

    /// Whether moving from `from` one step in `dir` is allowed. Slopes force
    /// the direction both onto and off them when `slippery`.
    fn can_move(&self, from: Pos, dir: Direction, to: Pos, slippery: bool) -> bool {
        !slippery
            || (slope(self.grid[from]).is_none_or(|s| s == dir)
                && slope(self.grid[to]).is_none_or(|s| s == dir))
    }

    fn graph(&self, slippery: bool) -> TrailGraph {
        let mut nodes = vec![self.start, self.end];
        nodes.extend(
            self.grid
                .positions()
                .filter(|&pos| self.grid[pos] != b'#' && self.open_neighbours(pos).count() >= 3),
        );
        let index: FxHashMap<Pos, usize> = nodes.iter().enumerate().map(|(i, &p)| (p, i)).collect();

        let mut edges = vec![Vec::new(); nodes.len()];
        for (id, &node) in nodes.iter().enumerate() {
            for (dir, next) in self.open_neighbours(node) {
                if !self.can_move(node, dir, next, slippery) {
                    continue;
                }
                let (mut prev, mut current, mut len) = (node, next, 1);
                loop {
                    if let Some(&to) = index.get(&current) {
                        edges[id].push((to, len));
                        break;
                    }
                    let step = self.open_neighbours(current).find(|&(d, n)| {
                        n != prev && self.can_move(current, d, n, slippery)
                    });
                    let Some((_, n)) = step else {
                        break;
                    };
                    (prev, current, len) = (current, n, len + 1);
                }
            }
        }

        debug!(nodes = nodes.len(), slippery, "compressed trail graph");
        TrailGraph { edges }
    }
}

impl TrailGraph {
    /// Longest simple path from `node` to the exit, if any.
    fn longest_from(&self, node: usize, visited: &mut [bool]) -> Option<usize> {
        if node == END {
            return Some(0);
        }
        visited[node] = true;
        let mut best = None;
        for &(to, len) in &self.edges[node] {
            if visited[to] {
                continue;
            }
            if let Some(rest) = self.longest_from(to, visited) {
                best = best.max(Some(rest + len));
            }
        }
        visited[node] = false;
        best
    }

    fn longest_hike(&self) -> Result<usize, SolveError> {
        let mut visited = vec![false; self.edges.len()];
        self.longest_from(START, &mut visited)
            .ok_or_else(|| SolveError::logic("no path to the exit"))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.graph(true).longest_hike()?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.graph(false).longest_hike()?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        #.#####################
        #.......#########...###
        #######.#########.#.###
        ###.....#.>.>.###.#.###
        ###v#####.#v#.###.#.###
        ###.>...#.#.#.....#...#
        ###v###.#.#.#########.#
        ###...#.#.#.......#...#
        #####.#.#.#######.#.###
        #.....#.#.#.......#...#
        #.#####.#.#.#########v#
        #.#...#...#...###...>.#
        #.#.#v#######v###.###v#
        #...#.>.#...>.>.#.###.#
        #####v#.#.###v#.#.###.#
        #.....#...#...#.#.#...#
        #.#########.###.#.#.###
        #...###...#...#...#.###
        ###.###.#.###v#####v###
        #...#...#.#.>.>.#.>.###
        #.###.###.#.###.#.#v###
        #.....###...###...#...#
        #####################.#
    "};

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "94");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "154");
    }

    #[test]
    fn test_junctions_found() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.graph(false).edges.len(), 9);
    }

    #[test]
    fn test_slope_blocks_the_only_way() {
        let maze = indoc! {"
            #.###
            #.###
            #^###
            #.###
            #.###
        "};
        let mut shared = Solver::parse(maze).unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::Logic(_))
        ));
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "4");
    }
}
