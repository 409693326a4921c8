//! Batch controller driving history computation for pending researchers.
//!
//! One invocation of [`BatchController::process_chunk`] selects up to a
//! caller-supplied number of pending researchers from the durable store and
//! processes them sequentially: fetch works, build the h-index series, fit
//! the slope, persist everything atomically. Eligibility is re-queried from
//! the store on every invocation rather than held in memory, so the loop is
//! safe to kill and restart at any point - at most the in-flight
//! researcher's work is redone.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::history::{h_index_series, series_points, trend_slope};
use crate::provider::{ProviderError, Work, WorksProvider, parse_retry_after};
use crate::store::{HistoryPoint, PendingFilter, Researcher, ResearcherStore, StoreError};

use super::retry::{FailureType, RetryDecision, RetryPolicy, classify_error};

/// Error type for batch invocations.
///
/// Only store-level failures of the chunk itself surface here; everything
/// that goes wrong for an individual researcher is contained and logged.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The chunk-selection or count query failed. The store is a hard
    /// dependency shared by every researcher, so this aborts the invocation.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Why a single researcher's processing pass failed.
///
/// Either way the researcher keeps its pending state and is retried by a
/// later invocation.
#[derive(Debug, Error)]
enum ProcessError {
    #[error("works fetch failed: {0}")]
    Fetch(#[from] ProviderError),

    #[error("history persist failed: {0}")]
    Persist(#[from] StoreError),
}

/// Statistics from one chunk invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunkStats {
    /// Researchers whose history was computed and persisted.
    pub processed: usize,
    /// Researchers that failed and remain pending for retry.
    pub failed: usize,
    /// Pending researchers left in the store after this chunk.
    pub remaining: i64,
}

/// Sequential, resumable processor for pending researchers.
///
/// # Failure Isolation
///
/// A fetch, compute, or persist failure for one researcher never aborts the
/// chunk: the failure is logged, the researcher keeps `history_computed = 0`,
/// and the loop moves on. There is no failed state to administrate - retry
/// is simply the next invocation selecting the researcher again.
///
/// # State machine per researcher
///
/// ```text
/// PENDING --fetch + compute + persist ok--> COMPLETED
/// PENDING --any failure-->                  PENDING (unchanged)
/// ```
pub struct BatchController {
    store: ResearcherStore,
    provider: Arc<dyn WorksProvider>,
    retry_policy: RetryPolicy,
}

impl BatchController {
    /// Creates a controller over the given store and works provider.
    #[must_use]
    pub fn new(
        store: ResearcherStore,
        provider: Arc<dyn WorksProvider>,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            store,
            provider,
            retry_policy,
        }
    }

    /// Processes up to `limit` pending researchers and returns chunk stats.
    ///
    /// Selection is filtered by `filter` (h-index range and/or source tag)
    /// and ordered by two-year citedness descending. Each researcher's
    /// results are persisted immediately upon success, so progress is
    /// durable per researcher, not per chunk.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Store`] only when the selection or count query
    /// itself fails; per-researcher failures are absorbed into the stats.
    #[instrument(skip(self, filter), fields(limit))]
    pub async fn process_chunk(
        &self,
        limit: i64,
        filter: &PendingFilter,
    ) -> Result<ChunkStats, BatchError> {
        let candidates = self.store.select_pending(limit, filter).await?;
        info!(
            candidates = candidates.len(),
            provider = self.provider.name(),
            "selected pending researchers"
        );

        let mut stats = ChunkStats::default();

        for (position, researcher) in candidates.iter().enumerate() {
            info!(
                researcher = %researcher.id,
                name = %researcher.name,
                h_index = researcher.h_index,
                position = position + 1,
                total = candidates.len(),
                "processing researcher"
            );

            match self.process_researcher(researcher).await {
                Ok(slope) => {
                    debug!(researcher = %researcher.id, slope, "history persisted");
                    stats.processed += 1;
                }
                Err(error) => {
                    warn!(
                        researcher = %researcher.id,
                        error = %error,
                        "processing failed; researcher stays pending for a later pass"
                    );
                    stats.failed += 1;
                }
            }
        }

        stats.remaining = self.store.count_pending(filter).await?;
        info!(
            processed = stats.processed,
            failed = stats.failed,
            remaining = stats.remaining,
            "chunk complete"
        );

        Ok(stats)
    }

    /// Runs the full pipeline for one researcher and returns the slope.
    ///
    /// An empty works list is not an error: it yields an all-zero series
    /// with slope 0.0, recorded as a legitimate completed result.
    async fn process_researcher(&self, researcher: &Researcher) -> Result<f64, ProcessError> {
        let works = self.fetch_with_retry(&researcher.id).await?;
        debug!(researcher = %researcher.id, works = works.len(), "fetched works");

        let series = h_index_series(&works);
        let slope = trend_slope(&series_points(&series));

        let points: Vec<HistoryPoint> = series_points(&series)
            .into_iter()
            .map(|(year, h)| HistoryPoint {
                year: i64::from(year),
                h_index: i64::from(h),
            })
            .collect();

        self.store
            .save_history(&researcher.id, &points, slope)
            .await?;

        info!(
            researcher = %researcher.id,
            first = series[0],
            last = series[series.len() - 1],
            slope,
            "history computed"
        );

        Ok(slope)
    }

    /// Fetches works with bounded retries on transient failures.
    ///
    /// When the source rate-limits us and names a Retry-After delay, that
    /// delay replaces the backoff for the next attempt.
    async fn fetch_with_retry(&self, author_id: &str) -> Result<Vec<Work>, ProviderError> {
        let mut attempt = 1;

        loop {
            let error = match self.provider.fetch_works(author_id).await {
                Ok(works) => return Ok(works),
                Err(error) => error,
            };

            let failure = classify_error(&error);
            match self.retry_policy.should_retry(failure, attempt) {
                RetryDecision::Retry {
                    delay,
                    attempt: next_attempt,
                } => {
                    let delay = server_mandated_delay(&error, failure).unwrap_or(delay);
                    debug!(
                        author = %author_id,
                        attempt,
                        delay_ms = delay.as_millis(),
                        error = %error,
                        "retrying works fetch"
                    );
                    tokio::time::sleep(delay).await;
                    attempt = next_attempt;
                }
                RetryDecision::DoNotRetry { reason } => {
                    debug!(author = %author_id, attempt, reason = %reason, "giving up on fetch");
                    return Err(error);
                }
            }
        }
    }
}

impl std::fmt::Debug for BatchController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchController")
            .field("provider", &self.provider.name())
            .field("retry_policy", &self.retry_policy)
            .finish_non_exhaustive()
    }
}

/// Extracts a usable Retry-After delay from a rate-limit error.
fn server_mandated_delay(error: &ProviderError, failure: FailureType) -> Option<Duration> {
    if failure != FailureType::RateLimited {
        return None;
    }
    match error {
        ProviderError::RateLimited {
            retry_after: Some(value),
            ..
        } => parse_retry_after(value),
        _ => None,
    }
}
