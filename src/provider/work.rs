//! Transient work records returned by a works provider.

use serde::Deserialize;

/// A single publication with its citation count as known at fetch time.
///
/// Works are never persisted; they exist only long enough to build a
/// researcher's history series. A work without a publication year can never
/// qualify for any window year and is effectively inert.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Work {
    /// Year the work was published, when the source knows it.
    #[serde(default)]
    pub publication_year: Option<i32>,
    /// Total citations received as of fetch time.
    #[serde(default)]
    pub cited_by_count: u32,
}
