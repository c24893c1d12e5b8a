use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;
use tracing::debug;

use crate::utils::env_override;
use crate::utils::parsing::{lines_nonempty, parse_ints};
use crate::utils::union_find::DisjointSets;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// Closest pairs wired up in part 1 unless `PAIRS` overrides it.
const DEFAULT_PAIRS: usize = 1000;

type Point = [i64; 3];

#[derive(Debug)]
pub struct Playground {
    boxes: Vec<Point>,
    /// Every pair of junction boxes, closest first.
    pairs: Vec<(usize, usize)>,
    /// How many of the closest pairs part 1 wires up.
    wired: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = Playground;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let boxes = lines_nonempty(input)
            .map(|line| {
                let coords: Vec<i64> = parse_ints(line)?;
                coords
                    .try_into()
                    .map_err(|_| ParseError::invalid(format!("expected x,y,z in {line:?}")))
            })
            .collect::<Result<Vec<Point>, _>>()?;

        let pairs = (0..boxes.len())
            .tuple_combinations()
            .sorted_by_cached_key(|&(a, b)| distance_sq(&boxes[a], &boxes[b]))
            .collect();

        let wired = env_override("PAIRS", DEFAULT_PAIRS)?;
        Ok(Playground {
            boxes,
            pairs,
            wired,
        })
    }
}

fn distance_sq(a: &Point, b: &Point) -> i64 {
    a.iter().zip(b).map(|(p, q)| (p - q) * (p - q)).sum()
}

impl Playground {
    /// Product of the three largest circuits after wiring the `pairs`
    /// closest pairs, whether or not a pair was already connected.
    fn largest_circuits(&self, pairs: usize) -> usize {
        let mut circuits = DisjointSets::new(self.boxes.len());
        for &(a, b) in self.pairs.iter().take(pairs) {
            circuits.union(a, b);
        }
        let mut sizes = circuits.set_sizes();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes.iter().take(3).product()
    }

    /// The pair whose wiring first joins every box into one circuit.
    fn last_connection(&self) -> Option<(usize, usize)> {
        let mut circuits = DisjointSets::new(self.boxes.len());
        self.pairs
            .iter()
            .copied()
            .find(|&(a, b)| circuits.union(a, b) && circuits.components() == 1)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        debug!(pairs = shared.wired, boxes = shared.boxes.len(), "wiring closest pairs");
        Ok(shared.largest_circuits(shared.wired).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (a, b) = shared
            .last_connection()
            .ok_or_else(|| SolveError::logic("fewer than two junction boxes"))?;
        Ok((shared.boxes[a][0] * shared.boxes[b][0]).to_string())
    }
}
