//! CLI command handlers.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use citetrack_core::{
    BatchController, Database, OpenAlexProvider, PendingFilter, RateLimiter, ResearcherStore,
    RetryPolicy, categorize_all,
};

use crate::cli::HistoryArgs;

/// Runs one history chunk: select pending researchers, compute, persist.
pub async fn run_history_command(db: Database, args: HistoryArgs) -> Result<()> {
    let store = ResearcherStore::new(db);

    let rate_limiter = if args.rate_limit == 0 {
        debug!("rate limiting disabled");
        Arc::new(RateLimiter::disabled())
    } else {
        debug!(rate_limit_ms = args.rate_limit, "rate limiting enabled");
        Arc::new(RateLimiter::new(Duration::from_millis(args.rate_limit)))
    };

    let provider = match &args.base_url {
        Some(base_url) => OpenAlexProvider::with_base_url(&args.mailto, base_url, rate_limiter)?,
        None => OpenAlexProvider::new(&args.mailto, rate_limiter)?,
    };

    let controller = BatchController::new(
        store,
        Arc::new(provider),
        RetryPolicy::with_max_attempts(args.max_retries),
    );

    let filter = PendingFilter {
        min_h: args.min_h,
        max_h: args.max_h,
        source: args.source.clone(),
    };

    let stats = controller.process_chunk(args.limit, &filter).await?;

    info!(
        processed = stats.processed,
        failed = stats.failed,
        remaining = stats.remaining,
        "History chunk complete"
    );
    println!(
        "processed {} researcher(s), {} failed, {} still pending",
        stats.processed, stats.failed, stats.remaining
    );

    Ok(())
}

/// Runs a classification pass over every stored researcher.
pub async fn run_categorize_command(db: Database) -> Result<()> {
    let store = ResearcherStore::new(db);
    let stats = categorize_all(&store).await?;

    info!(
        assigned = stats.assigned,
        unmatched = stats.unmatched,
        "Classification complete"
    );
    println!(
        "assigned categories to {} researcher(s), {} unmatched",
        stats.assigned, stats.unmatched
    );

    Ok(())
}

/// Prints aggregate store counts.
pub async fn run_status_command(db: Database) -> Result<()> {
    let store = ResearcherStore::new(db);
    let counts = store.counts().await?;

    println!("researchers:  {}", counts.total);
    println!("completed:    {}", counts.completed);
    println!("pending:      {}", counts.pending);
    println!("categorized:  {}", counts.categorized);

    Ok(())
}
