use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use anyhow::{Context, anyhow};

use crate::utils::parsing::lines_nonempty;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const DIAL_SIZE: i32 = 100;
const DIAL_START: i32 = 50;

#[derive(Debug)]
pub struct SharedData {
    /// Signed rotations; left turns are negative.
    rotations: Vec<i32>,
    counts: Option<ZeroCounts>,
}

#[derive(Debug, Clone, Copy)]
struct ZeroCounts {
    /// Rotations that end with the dial on 0.
    stops: u32,
    /// Clicks, anywhere in a rotation, that land on 0.
    clicks: u32,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        lines_nonempty(input)
            .enumerate()
            .map(|(n, line)| parse_rotation(line).with_context(|| format!("line {}", n + 1)))
            .collect::<anyhow::Result<Vec<i32>>>()
            .map(|rotations| SharedData {
                rotations,
                counts: None,
            })
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_rotation(line: &str) -> anyhow::Result<i32> {
    let (sign, amount) = match line.split_at_checked(1) {
        Some(("L", amount)) => (-1, amount),
        Some(("R", amount)) => (1, amount),
        _ => return Err(anyhow!("rotation must start with 'L' or 'R': {line:?}")),
    };
    let amount: i32 = amount
        .parse()
        .with_context(|| format!("bad rotation amount {amount:?}"))?;
    if amount < 0 {
        return Err(anyhow!("rotation amount must be non-negative"));
    }
    Ok(sign * amount)
}

/// Both answers come from one pass, so the first part to run stores them.
fn zero_counts(shared: &mut SharedData) -> ZeroCounts {
    *shared.counts.get_or_insert_with(|| {
        let mut dial = DIAL_START;
        let mut counts = ZeroCounts { stops: 0, clicks: 0 };
        for &rotation in &shared.rotations {
            let next = dial + rotation;
            // Multiples of the dial size passed over, end inclusive.
            let passed = if rotation >= 0 {
                next.div_euclid(DIAL_SIZE) - dial.div_euclid(DIAL_SIZE)
            } else {
                (dial - 1).div_euclid(DIAL_SIZE) - (next - 1).div_euclid(DIAL_SIZE)
            };
            counts.clicks += passed.unsigned_abs();
            dial = next.rem_euclid(DIAL_SIZE);
            if dial == 0 {
                counts.stops += 1;
            }
        }
        counts
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(zero_counts(shared).stops.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(zero_counts(shared).clicks.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        L68
        L30
        R48
        L5
        R60
        L55
        L1
        L99
        R14
        L82
    "};

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "6");
    }

    #[test]
    fn test_part2_first_also_works() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "6");
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3");
    }

    #[test]
    fn test_full_turns_click_every_lap() {
        let mut shared = Solver::parse("R1000\nL250").unwrap();
        // 50 -> 1050 passes 0 ten times, 50 -> -200 three more and stops on 0.
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "13");
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1");
    }

    #[test]
    fn test_bad_rotation_names_line() {
        let err = Solver::parse("L5\nX3").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(ref msg) if msg.contains("line 2")));
        assert!(Solver::parse("R-4").is_err());
    }
}
