//! Store module for researcher and history persistence.
//!
//! This module provides `SQLite`-backed persistence for researcher records
//! and their yearly h-index history. A researcher moves through a two-state
//! lifecycle (pending → completed) driven entirely by the completion flag;
//! there is no separate failed state, retries are driven by re-selection.
//!
//! # Overview
//!
//! The store consists of:
//! - [`ResearcherStore`] - Main interface for store operations
//! - [`Researcher`] - Persisted researcher record
//! - [`HistoryPoint`] - One (year, h-index) point of the series
//! - [`PendingFilter`] - Selection filters for batch processing
//! - [`StoreError`] - Operation error types
//!
//! # Atomicity
//!
//! [`ResearcherStore::save_history`] writes the full series, the slope, and
//! the completion flag in one transaction. Either all of it becomes visible
//! or none of it does; the flag can never be observed without eleven history
//! rows backing it.

mod error;
mod researcher;

pub use error::StoreError;
pub use researcher::{HistoryPoint, NewResearcher, PendingFilter, Researcher, StoreCounts};

use sqlx::Row;
use tracing::instrument;

use crate::db::Database;
use crate::history::{WINDOW_END, WINDOW_LEN, WINDOW_START};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Returns `Ok(())` if at least one row was affected; otherwise [`StoreError::ResearcherNotFound`].
fn check_affected(id: &str, rows_affected: u64) -> Result<()> {
    if rows_affected == 0 {
        Err(StoreError::ResearcherNotFound(id.to_string()))
    } else {
        Ok(())
    }
}

/// Validates that a series covers the fixed window exactly once per year.
fn check_series(points: &[HistoryPoint]) -> Result<()> {
    if points.len() != WINDOW_LEN {
        return Err(StoreError::IncompleteSeries {
            actual: points.len(),
        });
    }

    let mut seen = [false; WINDOW_LEN];
    for point in points {
        if point.year < i64::from(WINDOW_START) || point.year > i64::from(WINDOW_END) {
            return Err(StoreError::YearOutOfWindow { year: point.year });
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let slot = (point.year - i64::from(WINDOW_START)) as usize;
        if seen[slot] {
            return Err(StoreError::DuplicateYear { year: point.year });
        }
        seen[slot] = true;
    }

    Ok(())
}

/// Store manager for researcher records and history series.
///
/// Provides atomic operations over the researchers and history tables,
/// backed by `SQLite` with WAL mode.
#[derive(Debug, Clone)]
pub struct ResearcherStore {
    db: Database,
}

impl ResearcherStore {
    /// Creates a new store with the given database connection.
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Inserts or refreshes a researcher's profile fields.
    ///
    /// On conflict, source-supplied profile data is updated; computed state
    /// (`category`, `slope`, `history_computed`) is never touched, so a
    /// re-sync cannot silently undo a completed history.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the upsert fails.
    #[instrument(skip(self, profile), fields(id = %profile.id))]
    pub async fn upsert(&self, profile: &NewResearcher<'_>) -> Result<()> {
        sqlx::query(
            r"INSERT INTO researchers (
                id, name, orcid, h_index, i10_index, works_count,
                cited_by_count, two_yr_citedness, topics, affiliations,
                counts_by_year, source
              )
              VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                orcid = excluded.orcid,
                h_index = excluded.h_index,
                i10_index = excluded.i10_index,
                works_count = excluded.works_count,
                cited_by_count = excluded.cited_by_count,
                two_yr_citedness = excluded.two_yr_citedness,
                topics = excluded.topics,
                affiliations = excluded.affiliations,
                counts_by_year = excluded.counts_by_year,
                source = excluded.source,
                updated_at = datetime('now')",
        )
        .bind(profile.id)
        .bind(profile.name)
        .bind(profile.orcid)
        .bind(profile.h_index)
        .bind(profile.i10_index)
        .bind(profile.works_count)
        .bind(profile.cited_by_count)
        .bind(profile.two_yr_citedness)
        .bind(profile.topics)
        .bind(profile.affiliations)
        .bind(profile.counts_by_year)
        .bind(profile.source)
        .execute(self.db.pool())
        .await?;

        Ok(())
    }

    /// Retrieves a researcher by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Option<Researcher>> {
        let researcher = sqlx::query_as::<_, Researcher>("SELECT * FROM researchers WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(researcher)
    }

    /// Counts researchers whose history has not yet been computed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the query fails.
    #[instrument(skip(self, filter))]
    pub async fn count_pending(&self, filter: &PendingFilter) -> Result<i64> {
        let row = sqlx::query(
            r"SELECT COUNT(*) AS pending
              FROM researchers
              WHERE history_computed = 0
                AND h_index >= COALESCE(?, h_index)
                AND h_index <= COALESCE(?, h_index)
                AND source = COALESCE(?, source)",
        )
        .bind(filter.min_h)
        .bind(filter.max_h)
        .bind(filter.source.as_deref())
        .fetch_one(self.db.pool())
        .await?;

        Ok(row.get("pending"))
    }

    /// Selects up to `limit` pending researchers for processing.
    ///
    /// Ordered by two-year citedness descending so the highest-signal
    /// researchers are processed first. The selection is re-run from durable
    /// state on every invocation, which is what makes the batch loop safe to
    /// kill and restart.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the query fails.
    #[instrument(skip(self, filter), fields(limit))]
    pub async fn select_pending(
        &self,
        limit: i64,
        filter: &PendingFilter,
    ) -> Result<Vec<Researcher>> {
        let researchers = sqlx::query_as::<_, Researcher>(
            r"SELECT * FROM researchers
              WHERE history_computed = 0
                AND h_index >= COALESCE(?, h_index)
                AND h_index <= COALESCE(?, h_index)
                AND source = COALESCE(?, source)
              ORDER BY two_yr_citedness DESC, id ASC
              LIMIT ?",
        )
        .bind(filter.min_h)
        .bind(filter.max_h)
        .bind(filter.source.as_deref())
        .bind(limit)
        .fetch_all(self.db.pool())
        .await?;

        Ok(researchers)
    }

    /// Persists a researcher's full history series, slope, and completion flag.
    ///
    /// All writes happen in a single transaction: the eleven history rows,
    /// the slope, and `history_computed = 1` become visible together or not
    /// at all. Re-running for an already-completed researcher replaces the
    /// series rows in place.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IncompleteSeries`], [`StoreError::YearOutOfWindow`],
    /// or [`StoreError::DuplicateYear`] if the series does not cover the fixed
    /// window exactly; [`StoreError::ResearcherNotFound`] if no researcher
    /// exists with the given id; [`StoreError::Database`] if a write fails
    /// (the transaction is rolled back).
    #[instrument(skip(self, points), fields(id, slope, points = points.len()))]
    pub async fn save_history(&self, id: &str, points: &[HistoryPoint], slope: f64) -> Result<()> {
        check_series(points)?;

        let mut tx = self.db.pool().begin().await?;

        // Flag and slope first: an unknown id fails cleanly before any
        // history row is written (the rows also carry a foreign key).
        let result = sqlx::query(
            r"UPDATE researchers
              SET history_computed = 1, slope = ?, updated_at = datetime('now')
              WHERE id = ?",
        )
        .bind(slope)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(StoreError::ResearcherNotFound(id.to_string()));
        }

        for point in points {
            sqlx::query(
                r"INSERT OR REPLACE INTO h_index_history (researcher_id, year, h_index)
                  VALUES (?, ?, ?)",
            )
            .bind(id)
            .bind(point.year)
            .bind(point.h_index)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Reads a researcher's history series ordered by year.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn history(&self, id: &str) -> Result<Vec<HistoryPoint>> {
        let points = sqlx::query_as::<_, HistoryPoint>(
            r"SELECT year, h_index FROM h_index_history
              WHERE researcher_id = ?
              ORDER BY year ASC",
        )
        .bind(id)
        .fetch_all(self.db.pool())
        .await?;

        Ok(points)
    }

    /// Sets (or overwrites) a researcher's topic category.
    ///
    /// Independent of history computation; never touches the completion flag.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ResearcherNotFound`] if no researcher exists with
    /// the given id, or [`StoreError::Database`] if the update fails.
    #[instrument(skip(self), fields(id, category))]
    pub async fn set_category(&self, id: &str, category: &str) -> Result<()> {
        let result = sqlx::query(
            r"UPDATE researchers
              SET category = ?, updated_at = datetime('now')
              WHERE id = ?",
        )
        .bind(category)
        .bind(id)
        .execute(self.db.pool())
        .await?;

        check_affected(id, result.rows_affected())
    }

    /// Lists every researcher in the store, ordered by id.
    ///
    /// Used by the classification pass, which re-evaluates all raw topics.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Researcher>> {
        let researchers =
            sqlx::query_as::<_, Researcher>("SELECT * FROM researchers ORDER BY id ASC")
                .fetch_all(self.db.pool())
                .await?;

        Ok(researchers)
    }

    /// Returns aggregate counts for status reporting.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn counts(&self) -> Result<StoreCounts> {
        let counts = sqlx::query_as::<_, StoreCounts>(
            r"SELECT
                COUNT(*) AS total,
                COALESCE(SUM(history_computed), 0) AS completed,
                COALESCE(SUM(1 - history_computed), 0) AS pending,
                COALESCE(SUM(CASE WHEN category IS NOT NULL THEN 1 ELSE 0 END), 0) AS categorized
              FROM researchers",
        )
        .fetch_one(self.db.pool())
        .await?;

        Ok(counts)
    }
}
