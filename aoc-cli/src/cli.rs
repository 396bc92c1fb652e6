//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding puzzle inputs as `{year}/day{DD}.txt`
    #[arg(long, default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Read this file instead of the input directory (needs --year and --day)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode - only output answers
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert_eq!(args.year, None);
        assert!(args.tags.is_empty());
        assert_eq!(args.input_dir, PathBuf::from("inputs"));
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_tags_and_verbosity() {
        let args = Args::try_parse_from(["aoc", "-t", "2024,parsing", "-vv"]).unwrap();
        assert_eq!(args.tags, vec!["2024", "parsing"]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_ranges_are_enforced() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc", "-q", "-v"]).is_err());
    }
}
