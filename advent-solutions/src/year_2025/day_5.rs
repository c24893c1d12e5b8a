use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::parsing::{lines_nonempty, parse_ints};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug)]
pub struct Inventory {
    /// Fresh ranges, sorted and merged so that none overlap or touch.
    fresh: Vec<(u64, u64)>,
    available: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Inventory;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let (ranges, ids) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("blank line before ingredient ids".into()))?;

        let mut fresh = lines_nonempty(ranges)
            .map(|line| match parse_ints::<u64>(line)?.as_slice() {
                &[lo, hi] if lo <= hi => Ok((lo, hi)),
                _ => Err(ParseError::invalid(format!("bad fresh range {line:?}"))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        fresh = merge(fresh);

        let available = lines_nonempty(ids)
            .map(|line| line.trim().parse().map_err(|_| ParseError::number(line)))
            .collect::<Result<Vec<u64>, _>>()?;

        Ok(Inventory { fresh, available })
    }
}

fn merge(mut ranges: Vec<(u64, u64)>) -> Vec<(u64, u64)> {
    ranges.sort_unstable();
    let mut merged: Vec<(u64, u64)> = Vec::with_capacity(ranges.len());
    for (lo, hi) in ranges {
        match merged.last_mut() {
            Some(last) if lo <= last.1.saturating_add(1) => last.1 = last.1.max(hi),
            _ => merged.push((lo, hi)),
        }
    }
    merged
}

impl Inventory {
    fn is_fresh(&self, id: u64) -> bool {
        // Index of the first range starting after `id`.
        let i = self.fresh.partition_point(|&(lo, _)| lo <= id);
        i > 0 && id <= self.fresh[i - 1].1
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared.available.iter().filter(|&&id| shared.is_fresh(id)).count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.fresh.iter().map(|&(lo, hi)| hi - lo + 1).sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        3-5
        10-14
        16-20
        12-18

        1
        5
        8
        11
        17
        32
    "};

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.fresh, vec![(3, 5), (10, 20)]);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "14");
    }

    #[test]
    fn test_merge_touching_and_nested() {
        assert_eq!(merge(vec![(5, 6), (1, 4), (2, 3), (8, 9)]), vec![(1, 6), (8, 9)]);
    }

    #[test]
    fn test_missing_separator() {
        assert!(matches!(
            Solver::parse("3-5\n1\n"),
            Err(ParseError::MissingData(_))
        ));
    }
}
