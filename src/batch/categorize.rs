//! Classification pass over all stored researchers.

use tracing::{debug, info, instrument};

use crate::classify::categorize;
use crate::store::{ResearcherStore, StoreError};

/// Statistics from a classification pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorizeStats {
    /// Researchers that received (or kept, via overwrite) a category.
    pub assigned: usize,
    /// Researchers whose topics matched no rule; their category is left as-is.
    pub unmatched: usize,
}

/// Re-classifies every researcher's raw topics and writes the results.
///
/// Independent of history computation: only the category column is touched,
/// and only for researchers whose topics match a rule. A no-match outcome
/// never clears an existing category and is not an error.
///
/// # Errors
///
/// Returns [`StoreError`] if listing researchers or writing a category fails.
#[instrument(skip(store))]
pub async fn categorize_all(store: &ResearcherStore) -> Result<CategorizeStats, StoreError> {
    let researchers = store.list_all().await?;
    info!(researchers = researchers.len(), "running classification pass");

    let mut stats = CategorizeStats::default();

    for researcher in &researchers {
        let topics = researcher.parse_topics();
        match categorize(&topics) {
            Some(category) => {
                store.set_category(&researcher.id, category).await?;
                debug!(researcher = %researcher.id, category, "category assigned");
                stats.assigned += 1;
            }
            None => {
                debug!(researcher = %researcher.id, "no rule matched; category unset");
                stats.unmatched += 1;
            }
        }
    }

    info!(
        assigned = stats.assigned,
        unmatched = stats.unmatched,
        "classification pass complete"
    );

    Ok(stats)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::store::{NewResearcher, Researcher};

    async fn store_with(
        rows: &[(&str, Option<Vec<String>>)],
    ) -> ResearcherStore {
        let db = Database::new_in_memory().await.unwrap();
        let store = ResearcherStore::new(db);
        for (id, topics) in rows {
            let topics_json = topics
                .as_ref()
                .and_then(|t| Researcher::serialize_topics(t));
            let mut profile = NewResearcher::new(id, "Test");
            profile.topics = topics_json.as_deref();
            store.upsert(&profile).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_categorize_all_assigns_matching_categories() {
        let store = store_with(&[
            ("A1", Some(vec!["Tumor Immunology".to_string()])),
            ("A2", Some(vec!["Seismic Hazard Analysis".to_string()])),
        ])
        .await;

        let stats = categorize_all(&store).await.unwrap();
        assert_eq!(stats.assigned, 2);
        assert_eq!(stats.unmatched, 0);

        let a1 = store.get("A1").await.unwrap().unwrap();
        assert_eq!(a1.category.as_deref(), Some("Oncology & Cancer"));
        let a2 = store.get("A2").await.unwrap().unwrap();
        assert_eq!(a2.category.as_deref(), Some("Paleontology & Geology"));
    }

    #[tokio::test]
    async fn test_categorize_all_leaves_unmatched_unset() {
        let store = store_with(&[("A1", None), ("A2", Some(vec!["zzzzqq".to_string()]))]).await;

        let stats = categorize_all(&store).await.unwrap();
        assert_eq!(stats.assigned, 0);
        assert_eq!(stats.unmatched, 2);

        let a1 = store.get("A1").await.unwrap().unwrap();
        assert!(a1.category.is_none());
    }

    #[tokio::test]
    async fn test_categorize_all_is_idempotent() {
        let store = store_with(&[("A1", Some(vec!["Coronary Stenting".to_string()]))]).await;

        let first = categorize_all(&store).await.unwrap();
        let second = categorize_all(&store).await.unwrap();
        assert_eq!(first, second);

        let a1 = store.get("A1").await.unwrap().unwrap();
        assert_eq!(a1.category.as_deref(), Some("Cardiovascular"));
    }

    #[tokio::test]
    async fn test_categorize_all_overwrites_on_rerun_with_new_topics() {
        let store = store_with(&[("A1", Some(vec!["Tumor Biology".to_string()]))]).await;
        categorize_all(&store).await.unwrap();

        // Topics change on re-sync; the next pass overwrites the category
        let topics = vec!["Bayesian Inference".to_string()];
        let topics_json = Researcher::serialize_topics(&topics);
        let mut profile = NewResearcher::new("A1", "Test");
        profile.topics = topics_json.as_deref();
        store.upsert(&profile).await.unwrap();

        categorize_all(&store).await.unwrap();
        let a1 = store.get("A1").await.unwrap().unwrap();
        assert_eq!(a1.category.as_deref(), Some("Mathematics & Statistics"));
    }
}
