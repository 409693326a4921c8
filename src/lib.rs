//! Citetrack Core Library
//!
//! This library provides the core functionality for the citetrack tool,
//! which maintains a longitudinal dataset of researcher citation metrics
//! and derives historical h-index trajectories and growth trends.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`db`] - Database connection and schema management
//! - [`store`] - Researcher and history persistence
//! - [`provider`] - Works provider trait and OpenAlex client
//! - [`history`] - H-index series builder and trend estimator
//! - [`classify`] - Keyword-rule topic classification
//! - [`batch`] - Resumable batch processing of pending researchers

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod classify;
pub mod db;
pub mod history;
pub mod provider;
pub mod store;

// Re-export commonly used types
pub use batch::{
    BatchController, BatchError, ChunkStats, DEFAULT_MAX_RETRIES, FailureType, RetryDecision,
    RetryPolicy, categorize_all, classify_error,
};
pub use classify::{RULES, categorize};
pub use db::Database;
pub use history::{WINDOW_END, WINDOW_LEN, WINDOW_START, h_index_series, trend_slope, window_years};
pub use provider::{OpenAlexProvider, ProviderError, RateLimiter, Work, WorksProvider};
pub use store::{
    HistoryPoint, NewResearcher, PendingFilter, Researcher, ResearcherStore, StoreCounts,
    StoreError,
};
