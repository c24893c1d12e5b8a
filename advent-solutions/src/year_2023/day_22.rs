use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::sync::Mutex;
use tracing::debug;

use crate::utils::parsing::{lines_nonempty, parse_ints};
use crate::utils::set::Set;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Brick {
    lo: [u32; 3],
    hi: [u32; 3],
}

impl Brick {
    fn footprint(&self) -> impl Iterator<Item = (u32, u32)> + use<> {
        let (lo, hi) = (self.lo, self.hi);
        (lo[0]..=hi[0]).flat_map(move |x| (lo[1]..=hi[1]).map(move |y| (x, y)))
    }
}

/// Who rests on whom once every brick has settled.
#[derive(Debug)]
pub struct Supports {
    /// Bricks resting directly on brick `i`.
    above: Vec<Set<usize>>,
    /// Bricks brick `i` rests directly on.
    below: Vec<Set<usize>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Supports;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut bricks = lines_nonempty(input)
            .map(parse_brick)
            .collect::<Result<Vec<_>, _>>()?;
        settle(&mut bricks)
    }
}

fn parse_brick(line: &str) -> Result<Brick, ParseError> {
    let (a, b) = line
        .split_once('~')
        .ok_or_else(|| ParseError::invalid(format!("missing '~' in {line:?}")))?;
    let corner = |text: &str| -> Result<[u32; 3], ParseError> {
        let coords: Vec<u32> = parse_ints(text)?;
        coords
            .try_into()
            .map_err(|_| ParseError::invalid(format!("expected 3 coordinates in {text:?}")))
    };
    let (a, b) = (corner(a)?, corner(b)?);
    Ok(Brick {
        lo: [a[0].min(b[0]), a[1].min(b[1]), a[2].min(b[2])],
        hi: [a[0].max(b[0]), a[1].max(b[1]), a[2].max(b[2])],
    })
}

/// Drop bricks in order of height and record the resulting support graph.
fn settle(bricks: &mut [Brick]) -> Result<Supports, ParseError> {
    bricks.sort_by_key(|b| b.lo[2]);

    let mut above = vec![Set::new(); bricks.len()];
    let mut below = vec![Set::new(); bricks.len()];
    // Highest occupied z over each (x, y) column, and the brick there.
    let mut tops: FxHashMap<(u32, u32), (u32, usize)> = FxHashMap::default();

    for i in 0..bricks.len() {
        let rest = bricks[i]
            .footprint()
            .filter_map(|xy| tops.get(&xy).map(|&(z, _)| z))
            .max()
            .unwrap_or(0);
        for xy in bricks[i].footprint() {
            if let Some(&(z, j)) = tops.get(&xy) {
                if z == rest {
                    below[i].add(j);
                    above[j].add(i);
                }
            }
        }

        let brick = &mut bricks[i];
        if brick.lo[2] <= rest {
            return Err(ParseError::invalid(format!(
                "brick at z={} overlaps the bricks below it",
                brick.lo[2]
            )));
        }
        let drop = brick.lo[2] - (rest + 1);
        brick.lo[2] -= drop;
        brick.hi[2] -= drop;
        let top = brick.hi[2];
        for xy in brick.footprint() {
            tops.insert(xy, (top, i));
        }
    }

    Ok(Supports { above, below })
}

impl Supports {
    /// Bricks that would fall if brick `start` were disintegrated.
    fn chain_reaction(&self, start: usize) -> usize {
        let mut fallen = Set::new();
        fallen.add(start);
        let mut queue = vec![start];
        while let Some(brick) = queue.pop() {
            for &up in self.above[brick].iter() {
                if self.below[up].iter().all(|b| fallen.has(b)) && fallen.add(up) {
                    queue.push(up);
                }
            }
        }
        fallen.len() - 1
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let removable = shared
            .above
            .iter()
            .filter(|above| above.iter().all(|&up| shared.below[up].len() > 1))
            .count();
        Ok(removable.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let supports = &*shared;
        let total = Mutex::new(0usize);

        (0..supports.above.len())
            .into_par_iter()
            .try_for_each(|brick| {
                let fallen = supports.chain_reaction(brick);
                let mut total = total
                    .lock()
                    .map_err(|_| SolveError::logic("chain reaction total was poisoned"))?;
                *total += fallen;
                Ok::<_, SolveError>(())
            })?;

        let total = total
            .into_inner()
            .map_err(|_| SolveError::logic("chain reaction total was poisoned"))?;
        debug!(bricks = supports.above.len(), total, "chain reactions counted");
        Ok(total.to_string())
    }
}
