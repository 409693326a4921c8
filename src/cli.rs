//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use citetrack_core::DEFAULT_MAX_RETRIES;

/// Track researcher citation metrics and h-index growth trajectories.
///
/// Citetrack maintains a durable dataset of researcher metrics, reconstructs
/// yearly h-index series from a bibliometric source, and classifies
/// researchers into topic categories.
#[derive(Parser, Debug)]
#[command(name = "citetrack")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the SQLite database
    #[arg(long, default_value = "citetrack.db", global = true)]
    pub db: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute h-index history for a chunk of pending researchers
    History(HistoryArgs),

    /// Assign topic categories from raw topic strings
    Categorize,

    /// Show processing status counts
    Status,
}

/// Arguments for the history subcommand.
#[derive(clap::Args, Debug)]
pub struct HistoryArgs {
    /// Maximum researchers to process this invocation (1-10000)
    #[arg(short = 'n', long, default_value_t = 100, value_parser = clap::value_parser!(i64).range(1..=10_000))]
    pub limit: i64,

    /// Only process researchers with current h-index at or above this value
    #[arg(long)]
    pub min_h: Option<i64>,

    /// Only process researchers with current h-index at or below this value
    #[arg(long)]
    pub max_h: Option<i64>,

    /// Only process researchers carrying this source tag
    #[arg(long)]
    pub source: Option<String>,

    /// Contact email sent with provider requests (polite pool access)
    #[arg(long, default_value = "citetrack@example.com")]
    pub mailto: String,

    /// Minimum delay between provider requests in milliseconds (0 to disable, max 60000)
    #[arg(short = 'l', long, default_value_t = 110, value_parser = clap::value_parser!(u64).range(0..=60_000))]
    pub rate_limit: u64,

    /// Maximum fetch attempts per researcher for transient failures (1-10)
    #[arg(short = 'r', long, default_value_t = DEFAULT_MAX_RETRIES, value_parser = clap::value_parser!(u32).range(1..=10))]
    pub max_retries: u32,

    /// Alternate provider base URL (defaults to the production endpoint)
    #[arg(long)]
    pub base_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_args(args: Args) -> HistoryArgs {
        match args.command {
            Command::History(history) => history,
            other => panic!("expected history command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_history_default_args() {
        let args = Args::try_parse_from(["citetrack", "history"]).unwrap();
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
        assert_eq!(args.db, PathBuf::from("citetrack.db"));

        let history = history_args(args);
        assert_eq!(history.limit, 100);
        assert_eq!(history.rate_limit, 110);
        assert_eq!(history.max_retries, DEFAULT_MAX_RETRIES);
        assert!(history.min_h.is_none());
        assert!(history.base_url.is_none());
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["citetrack", "-v", "status"]).unwrap();
        assert_eq!(args.verbose, 1);

        let args = Args::try_parse_from(["citetrack", "-vv", "status"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_flag_sets_quiet() {
        let args = Args::try_parse_from(["citetrack", "-q", "status"]).unwrap();
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_db_path_override() {
        let args = Args::try_parse_from(["citetrack", "--db", "/tmp/x.db", "status"]).unwrap();
        assert_eq!(args.db, PathBuf::from("/tmp/x.db"));
    }

    #[test]
    fn test_cli_history_limit_flag() {
        let args = Args::try_parse_from(["citetrack", "history", "-n", "25"]).unwrap();
        assert_eq!(history_args(args).limit, 25);
    }

    #[test]
    fn test_cli_history_limit_zero_rejected() {
        let result = Args::try_parse_from(["citetrack", "history", "-n", "0"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_history_h_index_range() {
        let args = Args::try_parse_from([
            "citetrack", "history", "--min-h", "10", "--max-h", "40",
        ])
        .unwrap();
        let history = history_args(args);
        assert_eq!(history.min_h, Some(10));
        assert_eq!(history.max_h, Some(40));
    }

    #[test]
    fn test_cli_history_rate_limit_zero_allowed() {
        let args = Args::try_parse_from(["citetrack", "history", "-l", "0"]).unwrap();
        assert_eq!(history_args(args).rate_limit, 0);
    }

    #[test]
    fn test_cli_history_max_retries_over_max_rejected() {
        let result = Args::try_parse_from(["citetrack", "history", "-r", "11"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_missing_subcommand_rejected() {
        let result = Args::try_parse_from(["citetrack"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        // --help causes early exit, so we check it returns an error with Help kind
        let result = Args::try_parse_from(["citetrack", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_version_flag_shows_version() {
        let result = Args::try_parse_from(["citetrack", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let result = Args::try_parse_from(["citetrack", "status", "--invalid-flag"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
