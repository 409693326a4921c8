//! Researcher row types and history point definitions.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A researcher record as persisted in the durable store.
///
/// Rows are seeded by an external sync step with `history_computed = 0`;
/// the batch controller sets `slope` and `history_computed` together with
/// the full history series, and classification sets `category` independently.
#[derive(Debug, Clone, FromRow)]
pub struct Researcher {
    /// External-source author id (e.g. `A5023888391`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// ORCID identifier when known.
    pub orcid: Option<String>,
    /// Current h-index as reported by the source.
    pub h_index: i64,
    /// Current i10-index as reported by the source.
    pub i10_index: i64,
    /// Total works count.
    pub works_count: i64,
    /// Total citations received.
    pub cited_by_count: i64,
    /// Two-year mean citedness.
    pub two_yr_citedness: f64,
    /// Raw topic strings as a JSON array (parsed via `parse_topics()`).
    pub topics: Option<String>,
    /// Affiliation names as a JSON array.
    pub affiliations: Option<String>,
    /// Per-year aggregate counts as a JSON object.
    pub counts_by_year: Option<String>,
    /// Source-of-origin tag.
    pub source: String,
    /// Assigned topic category; NULL until classified (and possibly after,
    /// when no rule matches).
    pub category: Option<String>,
    /// OLS slope of the h-index series; NULL until history is computed.
    pub slope: Option<f64>,
    /// Completion flag: true iff the full history series is persisted.
    pub history_computed: bool,
    /// When the row was created.
    pub created_at: String,
    /// When the row was last updated.
    pub updated_at: String,
}

impl Researcher {
    /// Parses raw topics from the JSON array column.
    ///
    /// Returns an empty vector if topics are NULL or invalid JSON.
    #[must_use]
    pub fn parse_topics(&self) -> Vec<String> {
        let Some(topics_json) = &self.topics else {
            return Vec::new();
        };

        serde_json::from_str(topics_json).unwrap_or_default()
    }

    /// Serializes topic strings to a JSON array for database storage.
    ///
    /// Returns None if the topic list is empty.
    #[must_use]
    pub fn serialize_topics(topics: &[String]) -> Option<String> {
        if topics.is_empty() {
            return None;
        }

        serde_json::to_string(topics).ok()
    }
}

impl fmt::Display for Researcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Researcher {{ id: {}, name: {}, h_index: {}, history_computed: {} }}",
            self.id, self.name, self.h_index, self.history_computed
        )
    }
}

/// Profile fields for seeding or refreshing a researcher row.
///
/// Deliberately excludes `category`, `slope`, and `history_computed`: an
/// upsert never touches computed state, only source-supplied profile data.
#[derive(Debug, Clone)]
pub struct NewResearcher<'a> {
    /// External-source author id.
    pub id: &'a str,
    /// Display name.
    pub name: &'a str,
    /// ORCID identifier when known.
    pub orcid: Option<&'a str>,
    /// Current h-index.
    pub h_index: i64,
    /// Current i10-index.
    pub i10_index: i64,
    /// Total works count.
    pub works_count: i64,
    /// Total citations received.
    pub cited_by_count: i64,
    /// Two-year mean citedness.
    pub two_yr_citedness: f64,
    /// Raw topic strings as pre-serialized JSON.
    pub topics: Option<&'a str>,
    /// Affiliation names as pre-serialized JSON.
    pub affiliations: Option<&'a str>,
    /// Per-year aggregate counts as pre-serialized JSON.
    pub counts_by_year: Option<&'a str>,
    /// Source-of-origin tag.
    pub source: &'a str,
}

impl<'a> NewResearcher<'a> {
    /// Creates a minimal profile with zeroed metrics and the default source tag.
    #[must_use]
    pub fn new(id: &'a str, name: &'a str) -> Self {
        Self {
            id,
            name,
            orcid: None,
            h_index: 0,
            i10_index: 0,
            works_count: 0,
            cited_by_count: 0,
            two_yr_citedness: 0.0,
            topics: None,
            affiliations: None,
            counts_by_year: None,
            source: "openalex",
        }
    }
}

/// A single (year, h-index) point of a researcher's history series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Window year.
    pub year: i64,
    /// H-index at the end of that year.
    pub h_index: i64,
}

/// Optional filters applied when counting or selecting pending researchers.
///
/// All bounds are inclusive; `None` means unfiltered.
#[derive(Debug, Clone, Default)]
pub struct PendingFilter {
    /// Minimum current h-index.
    pub min_h: Option<i64>,
    /// Maximum current h-index.
    pub max_h: Option<i64>,
    /// Restrict to a source-of-origin tag.
    pub source: Option<String>,
}

/// Aggregate row counts for status reporting.
#[derive(Debug, Clone, Copy, Default, FromRow)]
pub struct StoreCounts {
    /// Total researchers in the store.
    pub total: i64,
    /// Researchers with a complete history series.
    pub completed: i64,
    /// Researchers still awaiting history computation.
    pub pending: i64,
    /// Researchers with an assigned category.
    pub categorized: i64,
}
