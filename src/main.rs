//! CLI entry point for the citetrack tool.

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use citetrack_core::Database;

mod cli;
mod commands;

use cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");
    info!("Citetrack starting");

    let db = Database::new(&args.db).await?;

    match args.command {
        Command::History(history_args) => commands::run_history_command(db, history_args).await,
        Command::Categorize => commands::run_categorize_command(db).await,
        Command::Status => commands::run_status_command(db).await,
    }
}
