//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Run one day's puzzle solver
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run one day's puzzle solver", version)]
pub struct Args {
    /// Day to run
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Part to run
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: u8,

    /// Input file, or `-` for standard input (defaults to input/<year>/day-<DD>.txt)
    pub input: Option<PathBuf>,

    /// Event year (defaults to the latest registered year)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Number of threads for days that run in parallel
    #[arg(long)]
    pub threads: Option<usize>,

    /// Print parse and solve timing to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let args = Args::try_parse_from(["advent", "7", "2", "-"]).unwrap();
        assert_eq!(args.day, 7);
        assert_eq!(args.part, 2);
        assert_eq!(args.input, Some(PathBuf::from("-")));
        assert_eq!(args.year, None);
        assert!(!args.verbose);
    }

    #[test]
    fn test_options() {
        let args =
            Args::try_parse_from(["advent", "-y", "2023", "--threads", "3", "-v", "25", "1"])
                .unwrap();
        assert_eq!(args.year, Some(2023));
        assert_eq!(args.threads, Some(3));
        assert!(args.verbose);
        assert_eq!(args.input, None);
    }

    #[test]
    fn test_rejects_out_of_range_day_and_part() {
        assert!(Args::try_parse_from(["advent", "0", "1"]).is_err());
        assert!(Args::try_parse_from(["advent", "26", "1"]).is_err());
        assert!(Args::try_parse_from(["advent", "1", "3"]).is_err());
        assert!(Args::try_parse_from(["advent", "1"]).is_err());
    }
}
