//! Error types for researcher store operations.

use thiserror::Error;

use crate::history::WINDOW_LEN;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database operation failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No researcher exists with the given id.
    #[error("researcher not found: {0}")]
    ResearcherNotFound(String),

    /// A history write was attempted without the full window of points.
    ///
    /// The completion flag is only ever set together with a full series,
    /// so a short or padded series is rejected before any row is written.
    #[error("history series must have exactly {WINDOW_LEN} points, got {actual}")]
    IncompleteSeries {
        /// Number of points that were supplied.
        actual: usize,
    },

    /// A history point's year falls outside the fixed window.
    #[error("history point year {year} is outside the {WINDOW_LEN}-year window")]
    YearOutOfWindow {
        /// The offending year.
        year: i64,
    },

    /// Two history points share the same year.
    #[error("duplicate history point for year {year}")]
    DuplicateYear {
        /// The duplicated year.
        year: i64,
    },
}
