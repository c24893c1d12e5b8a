//! Output formatting for solver results

use advent_solver::{DynSolver, SolveResult};
use chrono::TimeDelta;

/// Prints answers to stdout and, when verbose, timing to stderr
pub struct OutputFormatter {
    verbose: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print the answer, followed by timing when verbose
    pub fn print_result(&self, solver: &dyn DynSolver, part: u8, result: &SolveResult) {
        println!("{}", result.answer);
        if self.verbose {
            eprintln!("{}", timing_line(solver, part, result));
        }
    }
}

fn timing_line(solver: &dyn DynSolver, part: u8, result: &SolveResult) -> String {
    format!(
        "{}/{:02} Part {}: parse: {}, solve: {}",
        solver.year(),
        solver.day(),
        part,
        format_duration(solver.parse_duration()),
        format_duration(result.duration())
    )
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
    }

    #[test]
    fn test_timing_line_names_the_day() {
        let registry = advent_solutions::registry().unwrap();
        let mut solver = registry.create_solver(2025, 3, "987654321111111").unwrap();
        let result = solver.solve(1).unwrap();

        assert_eq!(result.answer, "98");
        let line = timing_line(&*solver, 1, &result);
        assert!(line.starts_with("2025/03 Part 1: parse: "), "{line}");
        assert!(line.contains(", solve: "), "{line}");
    }
}
