//! Keyword-rule topic classification.
//!
//! Maps a researcher's raw topic strings (free text from the external
//! source) to at most one category from a fixed curated list. Rules live in
//! [`RULES`] as an ordered table; [`categorize`] walks it top to bottom and
//! the first rule with a keyword hit wins. No match leaves the researcher
//! uncategorized, which is a legitimate terminal state.
//!
//! # Example
//!
//! ```
//! use citetrack_core::classify::categorize;
//!
//! let topics = vec!["Pediatric Cardiology".to_string()];
//! assert_eq!(categorize(&topics), Some("Cardiovascular"));
//!
//! let nothing: Vec<String> = Vec::new();
//! assert_eq!(categorize(&nothing), None);
//! ```

mod classifier;
mod rules;

pub use classifier::categorize;
pub use rules::{CategoryRule, RULES};
