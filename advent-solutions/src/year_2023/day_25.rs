use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use petgraph::algo::connected_components;
use petgraph::graph::{Edge, NodeIndex, UnGraph};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

use crate::utils::parsing::lines_nonempty;
use crate::utils::union_find::DisjointSets;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// Contraction attempts per worker before giving up.
const ATTEMPTS_PER_WORKER: usize = 5_000;
const SEED: u64 = 0x2023_1225;

/// Components as nodes, one undirected edge per wire.
#[derive(Debug)]
pub struct Wiring<'a> {
    graph: UnGraph<&'a str, ()>,
}

impl AocParser for Solver {
    type SharedData<'a> = Wiring<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut graph = UnGraph::default();
        let mut nodes: FxHashMap<&str, NodeIndex> = FxHashMap::default();
        for line in lines_nonempty(input) {
            let (name, others) = line
                .split_once(':')
                .ok_or_else(|| ParseError::invalid(format!("missing ':' in {line:?}")))?;
            let name = name.trim();
            let from = *nodes.entry(name).or_insert_with(|| graph.add_node(name));
            for other in others.split_whitespace() {
                let to = *nodes.entry(other).or_insert_with(|| graph.add_node(other));
                graph.update_edge(from, to, ());
            }
        }
        Ok(Wiring { graph })
    }
}

fn endpoints(wire: &Edge<()>) -> (usize, usize) {
    (wire.source().index(), wire.target().index())
}

impl Wiring<'_> {
    /// One round of randomized contraction down to two groups.
    ///
    /// Returns the product of the group sizes if exactly three wires cross
    /// between them. Picking uniformly among all wires and skipping those
    /// already inside a group is the same as picking among remaining wires.
    fn contract(&self, rng: &mut ChaCha8Rng) -> Option<usize> {
        let wires = self.graph.raw_edges();
        let mut groups = DisjointSets::new(self.graph.node_count());
        while groups.components() > 2 {
            let (a, b) = endpoints(&wires[rng.random_range(0..wires.len())]);
            groups.union(a, b);
        }

        let crossing = wires
            .iter()
            .map(endpoints)
            .filter(|&(a, b)| !groups.connected(a, b))
            .count();
        (crossing == 3).then(|| groups.set_sizes().iter().product::<usize>())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.graph.node_count() < 2 || connected_components(&shared.graph) != 1 {
            return Err(SolveError::logic("wiring is not one connected machine"));
        }

        let wiring = &*shared;
        let workers = rayon::current_num_threads();
        let found = AtomicBool::new(false);
        debug!(
            workers,
            nodes = wiring.graph.node_count(),
            wires = wiring.graph.edge_count(),
            "searching for a 3-wire cut"
        );

        let product = (0..workers).into_par_iter().find_map_any(|worker| {
            let mut rng = ChaCha8Rng::seed_from_u64(SEED + worker as u64);
            for attempt in 0..ATTEMPTS_PER_WORKER {
                if found.load(Ordering::Relaxed) {
                    return None;
                }
                if let Some(product) = wiring.contract(&mut rng) {
                    found.store(true, Ordering::Relaxed);
                    debug!(worker, attempt, product, "found 3-wire cut");
                    return Some(product);
                }
            }
            None
        });

        product
            .map(|p| p.to_string())
            .ok_or_else(|| SolveError::logic("no cut of size 3 found"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok("Merry Christmas!".to_string())
    }
}
