use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use rustc_hash::FxHashMap;

use crate::utils::memo::{Memo, MemoProblem, VecBackend};
use crate::utils::parsing::lines_nonempty;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug)]
pub struct Reactor<'a> {
    ids: FxHashMap<&'a str, usize>,
    outputs: Vec<Vec<usize>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Reactor<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut reactor = Reactor {
            ids: FxHashMap::default(),
            outputs: Vec::new(),
        };
        for line in lines_nonempty(input) {
            let (device, outputs) = line
                .split_once(':')
                .ok_or_else(|| ParseError::invalid(format!("missing ':' in {line:?}")))?;
            let from = reactor.intern(device.trim());
            for output in outputs.split_whitespace() {
                let to = reactor.intern(output);
                reactor.outputs[from].push(to);
            }
        }
        Ok(reactor)
    }
}

impl<'a> Reactor<'a> {
    fn intern(&mut self, name: &'a str) -> usize {
        let next = self.ids.len();
        let id = *self.ids.entry(name).or_insert(next);
        if id == next {
            self.outputs.push(Vec::new());
        }
        id
    }

    fn device(&self, name: &str) -> Result<usize, SolveError> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| SolveError::logic(format!("device {name} is missing")))
    }

    /// Number of distinct paths from `from` to `to`.
    fn paths(&self, from: usize, to: usize) -> u64 {
        Memo::new(
            VecBackend::with_capacity(self.outputs.len()),
            PathCount {
                outputs: &self.outputs,
                target: to,
            },
        )
        .get(&from)
    }
}

/// Paths to `target` from a device: the sum over its outputs.
struct PathCount<'g> {
    outputs: &'g [Vec<usize>],
    target: usize,
}

impl MemoProblem<usize, u64> for PathCount<'_> {
    fn deps(&self, device: &usize) -> Vec<usize> {
        if *device == self.target {
            Vec::new()
        } else {
            self.outputs[*device].clone()
        }
    }

    fn compute(&self, device: &usize, deps: Vec<u64>) -> u64 {
        if *device == self.target {
            1
        } else {
            deps.iter().sum()
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let you = shared.device("you")?;
        let out = shared.device("out")?;
        Ok(shared.paths(you, out).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let [svr, fft, dac, out] = ["svr", "fft", "dac", "out"].map(|name| shared.device(name));
        let (svr, fft, dac, out) = (svr?, fft?, dac?, out?);

        // The graph is acyclic, so at most one of the two orders has paths.
        let fft_to_dac = shared.paths(fft, dac);
        let dac_to_fft = shared.paths(dac, fft);
        if fft_to_dac == 0 && dac_to_fft == 0 {
            return Err(SolveError::logic("no path between fft and dac"));
        }
        let via_fft_first = shared.paths(svr, fft) * fft_to_dac * shared.paths(dac, out);
        let via_dac_first = shared.paths(svr, dac) * dac_to_fft * shared.paths(fft, out);
        Ok((via_fft_first + via_dac_first).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;
    use indoc::indoc;

    const FROM_YOU: &str = indoc! {"
        aaa: you hhh
        you: bbb ccc
        bbb: ddd eee
        ccc: ddd eee fff
        ddd: ggg
        eee: out
        fff: out
        ggg: out
        hhh: ccc fff iii
        iii: out
    "};

    const FROM_SERVER: &str = indoc! {"
        svr: aaa bbb
        aaa: fft
        fft: ccc
        bbb: tty
        tty: ccc
        ccc: ddd eee
        ddd: hub
        hub: fff
        eee: dac
        dac: fff
        fff: ggg hhh
        ggg: out
        hhh: out
    "};

    #[test]
    fn test_part1_example() {
        let mut shared = Solver::parse(FROM_YOU).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "5");
    }

    #[test]
    fn test_part2_example() {
        let mut shared = Solver::parse(FROM_SERVER).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2");
    }

    #[test]
    fn test_missing_device() {
        let mut shared = Solver::parse(FROM_YOU).unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::Logic(ref msg)) if msg == "device svr is missing"
        ));
    }

    #[test]
    fn test_fft_and_dac_unconnected() {
        let mut shared = Solver::parse("svr: fft dac\nfft: out\ndac: out\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::Logic(ref msg)) if msg.contains("fft and dac")
        ));
    }
}
