//! Batch processing of pending researchers.
//!
//! This module coordinates the per-researcher pipeline (fetch works, build
//! series, fit slope, persist atomically) with retry support and failure
//! isolation.
//!
//! # Overview
//!
//! - [`BatchController`] - Sequential chunk processor over the durable store
//! - [`RetryPolicy`] / [`classify_error`] - Bounded in-pass retry for
//!   transient fetch failures
//! - [`categorize_all`] - Independent classification pass
//!
//! # Resumability
//!
//! Nothing about the batch loop lives outside the durable store: each
//! invocation re-queries "not yet completed", processes a bounded chunk, and
//! exits. An external scheduler (cron, supervisor, or a shell loop) simply
//! re-invokes until `remaining` reaches zero.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use citetrack_core::batch::{BatchController, RetryPolicy};
//! use citetrack_core::provider::{OpenAlexProvider, RateLimiter};
//! use citetrack_core::store::{PendingFilter, ResearcherStore};
//! use citetrack_core::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::new(std::path::Path::new("citetrack.db")).await?;
//! let store = ResearcherStore::new(db);
//! let limiter = Arc::new(RateLimiter::new(Duration::from_millis(110)));
//! let provider = Arc::new(OpenAlexProvider::new("metrics@example.com", limiter)?);
//! let controller = BatchController::new(store, provider, RetryPolicy::default());
//!
//! let stats = controller.process_chunk(100, &PendingFilter::default()).await?;
//! println!("processed {}, {} remaining", stats.processed, stats.remaining);
//! # Ok(())
//! # }
//! ```

mod categorize;
mod controller;
mod retry;

pub use categorize::{CategorizeStats, categorize_all};
pub use controller::{BatchController, BatchError, ChunkStats};
pub use retry::{
    DEFAULT_MAX_RETRIES, FailureType, RetryDecision, RetryPolicy, classify_error,
};
