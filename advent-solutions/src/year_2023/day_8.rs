use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::utils::num::lcm_seq;
use crate::utils::parsing::lines_nonempty;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug)]
pub struct Network<'a> {
    /// `true` for a left turn.
    turns: Vec<bool>,
    nodes: FxHashMap<&'a str, (&'a str, &'a str)>,
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut lines = lines_nonempty(input);
        let turns = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("turn sequence".into()))?
            .chars()
            .map(|c| match c {
                'L' => Ok(true),
                'R' => Ok(false),
                other => Err(ParseError::invalid(format!("unknown turn {other:?}"))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if turns.is_empty() {
            return Err(ParseError::MissingData("turn sequence".into()));
        }

        let mut nodes = FxHashMap::default();
        for line in lines.filter(|line| !line.is_empty()) {
            let (name, targets) = line
                .split_once(" = ")
                .ok_or_else(|| ParseError::invalid(format!("malformed node {line:?}")))?;
            let (left, right) = targets
                .trim_start_matches('(')
                .trim_end_matches(')')
                .split_once(", ")
                .ok_or_else(|| ParseError::invalid(format!("malformed targets {line:?}")))?;
            nodes.insert(name, (left, right));
        }

        Ok(Network { turns, nodes })
    }
}

impl Network<'_> {
    /// Steps from `start` until `is_end` holds, or a logic error if the walk
    /// revisits a (node, turn index) state without getting there.
    fn walk(&self, start: &str, is_end: impl Fn(&str) -> bool) -> Result<u64, SolveError> {
        let limit = self.nodes.len() * self.turns.len();
        let mut current = start;
        for (steps, &left) in self.turns.iter().cycle().enumerate().take(limit + 1) {
            if is_end(current) {
                return Ok(steps as u64);
            }
            let &(l, r) = self
                .nodes
                .get(current)
                .ok_or_else(|| SolveError::logic(format!("node {current} is missing")))?;
            current = if left { l } else { r };
        }
        Err(SolveError::logic(format!("no end reachable from {start}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if !shared.nodes.contains_key("AAA") {
            return Err(SolveError::logic("node AAA is missing"));
        }
        Ok(shared.walk("AAA", |node| node == "ZZZ")?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Each ghost's path is periodic with the period of its first arrival.
        let cycles = shared
            .nodes
            .keys()
            .filter(|node| node.ends_with('A'))
            .map(|&start| shared.walk(start, |node| node.ends_with('Z')))
            .collect::<Result<Vec<u64>, _>>()?;
        if cycles.is_empty() {
            return Err(SolveError::logic("no starting node ends with 'A'"));
        }
        debug!(ghosts = cycles.len(), ?cycles, "ghost cycle lengths");
        Ok(lcm_seq(&cycles).to_string())
    }
}
