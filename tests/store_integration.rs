//! Integration tests for the store module.
//!
//! These tests verify `ResearcherStore` operations against a real SQLite
//! database, including the atomicity guarantees around the completion flag.

use citetrack_core::{
    Database, HistoryPoint, NewResearcher, PendingFilter, Researcher, ResearcherStore, StoreError,
    WINDOW_LEN, window_years,
};
use tempfile::TempDir;

/// Helper to create a test database with migrations applied.
async fn setup_test_db() -> (Database, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    let db = Database::new(&db_path)
        .await
        .expect("Failed to create database");

    (db, temp_dir)
}

fn series(values: [i64; WINDOW_LEN]) -> Vec<HistoryPoint> {
    window_years()
        .zip(values)
        .map(|(year, h_index)| HistoryPoint {
            year: i64::from(year),
            h_index,
        })
        .collect()
}

// ==================== Upsert & Get ====================

#[tokio::test]
async fn test_upsert_creates_pending_researcher() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = ResearcherStore::new(db);

    let mut profile = NewResearcher::new("A5000000001", "Grace Hopper");
    profile.h_index = 30;
    profile.two_yr_citedness = 4.2;
    store.upsert(&profile).await.expect("Failed to upsert");

    let researcher = store
        .get("A5000000001")
        .await
        .expect("Failed to get")
        .expect("Researcher should exist");

    assert_eq!(researcher.name, "Grace Hopper");
    assert_eq!(researcher.h_index, 30);
    assert!(!researcher.history_computed);
    assert!(researcher.slope.is_none());
    assert!(researcher.category.is_none());
}

#[tokio::test]
async fn test_upsert_refresh_keeps_computed_state() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = ResearcherStore::new(db);

    store
        .upsert(&NewResearcher::new("A5000000001", "Grace Hopper"))
        .await
        .unwrap();
    store
        .save_history("A5000000001", &series([1; WINDOW_LEN]), 0.0)
        .await
        .unwrap();
    store.set_category("A5000000001", "Computer Science & AI").await.unwrap();

    // A later sync refreshes the profile; computed state must survive
    let mut refreshed = NewResearcher::new("A5000000001", "Grace B. Hopper");
    refreshed.h_index = 31;
    store.upsert(&refreshed).await.unwrap();

    let researcher = store.get("A5000000001").await.unwrap().unwrap();
    assert_eq!(researcher.name, "Grace B. Hopper");
    assert!(researcher.history_computed);
    assert_eq!(researcher.slope, Some(0.0));
    assert_eq!(researcher.category.as_deref(), Some("Computer Science & AI"));
}

#[tokio::test]
async fn test_get_unknown_returns_none() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = ResearcherStore::new(db);

    let researcher = store.get("A5999999999").await.unwrap();
    assert!(researcher.is_none());
}

// ==================== Pending Selection ====================

#[tokio::test]
async fn test_count_and_select_pending() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = ResearcherStore::new(db);

    for (id, name) in [("A1", "One"), ("A2", "Two"), ("A3", "Three")] {
        store.upsert(&NewResearcher::new(id, name)).await.unwrap();
    }
    store
        .save_history("A2", &series([2; WINDOW_LEN]), 0.0)
        .await
        .unwrap();

    let filter = PendingFilter::default();
    assert_eq!(store.count_pending(&filter).await.unwrap(), 2);

    let pending = store.select_pending(10, &filter).await.unwrap();
    let ids: Vec<&str> = pending.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&"A1"));
    assert!(ids.contains(&"A3"));
}

#[tokio::test]
async fn test_select_pending_orders_by_citedness_desc() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = ResearcherStore::new(db);

    for (id, citedness) in [("A1", 1.0), ("A2", 9.0), ("A3", 4.0)] {
        let mut profile = NewResearcher::new(id, "Test");
        profile.two_yr_citedness = citedness;
        store.upsert(&profile).await.unwrap();
    }

    let pending = store
        .select_pending(10, &PendingFilter::default())
        .await
        .unwrap();
    let ids: Vec<&str> = pending.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["A2", "A3", "A1"]);
}

#[tokio::test]
async fn test_select_pending_respects_limit() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = ResearcherStore::new(db);

    for id in ["A1", "A2", "A3", "A4"] {
        store.upsert(&NewResearcher::new(id, "Test")).await.unwrap();
    }

    let pending = store
        .select_pending(2, &PendingFilter::default())
        .await
        .unwrap();
    assert_eq!(pending.len(), 2);
}

#[tokio::test]
async fn test_pending_filter_h_index_range() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = ResearcherStore::new(db);

    for (id, h) in [("A1", 5), ("A2", 15), ("A3", 25), ("A4", 35)] {
        let mut profile = NewResearcher::new(id, "Test");
        profile.h_index = h;
        store.upsert(&profile).await.unwrap();
    }

    let filter = PendingFilter {
        min_h: Some(10),
        max_h: Some(30),
        source: None,
    };
    assert_eq!(store.count_pending(&filter).await.unwrap(), 2);

    let pending = store.select_pending(10, &filter).await.unwrap();
    let mut ids: Vec<&str> = pending.iter().map(|r| r.id.as_str()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["A2", "A3"]);
}

#[tokio::test]
async fn test_pending_filter_bounds_are_inclusive() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = ResearcherStore::new(db);

    let mut profile = NewResearcher::new("A1", "Test");
    profile.h_index = 10;
    store.upsert(&profile).await.unwrap();

    let filter = PendingFilter {
        min_h: Some(10),
        max_h: Some(10),
        source: None,
    };
    assert_eq!(store.count_pending(&filter).await.unwrap(), 1);
}

#[tokio::test]
async fn test_pending_filter_source_tag() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = ResearcherStore::new(db);

    let mut a1 = NewResearcher::new("A1", "Test");
    a1.source = "openalex";
    store.upsert(&a1).await.unwrap();

    let mut a2 = NewResearcher::new("A2", "Test");
    a2.source = "manual";
    store.upsert(&a2).await.unwrap();

    let filter = PendingFilter {
        min_h: None,
        max_h: None,
        source: Some("manual".to_string()),
    };
    let pending = store.select_pending(10, &filter).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, "A2");
}

// ==================== History Atomicity ====================

#[tokio::test]
async fn test_save_history_writes_full_window() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = ResearcherStore::new(db);

    store
        .upsert(&NewResearcher::new("A1", "Test"))
        .await
        .unwrap();
    store
        .save_history("A1", &series([0, 0, 1, 1, 2, 3, 3, 4, 5, 6, 7]), 0.68)
        .await
        .unwrap();

    let points = store.history("A1").await.unwrap();
    assert_eq!(points.len(), WINDOW_LEN);
    assert_eq!(points[0].h_index, 0);
    assert_eq!(points[WINDOW_LEN - 1].h_index, 7);

    // Ordered by year
    assert!(points.windows(2).all(|pair| pair[0].year < pair[1].year));
}

#[tokio::test]
async fn test_save_history_rejects_partial_series() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = ResearcherStore::new(db);

    store
        .upsert(&NewResearcher::new("A1", "Test"))
        .await
        .unwrap();

    let partial = &series([1; WINDOW_LEN])[..5];
    let result = store.save_history("A1", partial, 0.5).await;
    assert!(matches!(result, Err(StoreError::IncompleteSeries { .. })));

    // Nothing was written: no rows, flag untouched
    assert!(store.history("A1").await.unwrap().is_empty());
    let researcher = store.get("A1").await.unwrap().unwrap();
    assert!(!researcher.history_computed);
    assert!(researcher.slope.is_none());
}

#[tokio::test]
async fn test_save_history_rerun_replaces_series_without_duplicates() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = ResearcherStore::new(db);

    store
        .upsert(&NewResearcher::new("A1", "Test"))
        .await
        .unwrap();
    store
        .save_history("A1", &series([1; WINDOW_LEN]), 0.0)
        .await
        .unwrap();
    store
        .save_history("A1", &series([2; WINDOW_LEN]), 0.0)
        .await
        .unwrap();

    let points = store.history("A1").await.unwrap();
    assert_eq!(points.len(), WINDOW_LEN, "rerun must not duplicate rows");
    assert!(points.iter().all(|p| p.h_index == 2));
}

#[tokio::test]
async fn test_completion_flag_implies_full_series() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = ResearcherStore::new(db);

    for id in ["A1", "A2", "A3"] {
        store.upsert(&NewResearcher::new(id, "Test")).await.unwrap();
    }
    store
        .save_history("A1", &series([3; WINDOW_LEN]), 0.0)
        .await
        .unwrap();
    store
        .save_history("A3", &series([5; WINDOW_LEN]), 0.1)
        .await
        .unwrap();

    // completed ⟹ exactly a full window of history rows
    for researcher in store.list_all().await.unwrap() {
        let points = store.history(&researcher.id).await.unwrap();
        if researcher.history_computed {
            assert_eq!(points.len(), WINDOW_LEN, "{} incomplete", researcher.id);
            assert!(researcher.slope.is_some());
        } else {
            assert!(points.is_empty(), "{} has orphan rows", researcher.id);
        }
    }
}

// ==================== Category ====================

#[tokio::test]
async fn test_set_category_independent_of_flag() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = ResearcherStore::new(db);

    store
        .upsert(&NewResearcher::new("A1", "Test"))
        .await
        .unwrap();
    store.set_category("A1", "Cardiovascular").await.unwrap();

    let researcher = store.get("A1").await.unwrap().unwrap();
    assert_eq!(researcher.category.as_deref(), Some("Cardiovascular"));
    assert!(!researcher.history_computed, "category must not complete");
}

#[tokio::test]
async fn test_set_category_unknown_researcher_errors() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = ResearcherStore::new(db);

    let result = store.set_category("A5999999999", "Cardiovascular").await;
    assert!(matches!(result, Err(StoreError::ResearcherNotFound(_))));
}

// ==================== Counts ====================

#[tokio::test]
async fn test_counts_empty_store() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = ResearcherStore::new(db);

    let counts = store.counts().await.unwrap();
    assert_eq!(counts.total, 0);
    assert_eq!(counts.completed, 0);
    assert_eq!(counts.pending, 0);
    assert_eq!(counts.categorized, 0);
}

#[tokio::test]
async fn test_counts_reflect_progress() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = ResearcherStore::new(db);

    for id in ["A1", "A2", "A3"] {
        store.upsert(&NewResearcher::new(id, "Test")).await.unwrap();
    }
    store
        .save_history("A1", &series([1; WINDOW_LEN]), 0.0)
        .await
        .unwrap();
    store.set_category("A1", "Chemistry").await.unwrap();
    store.set_category("A2", "Humanities").await.unwrap();

    let counts = store.counts().await.unwrap();
    assert_eq!(counts.total, 3);
    assert_eq!(counts.completed, 1);
    assert_eq!(counts.pending, 2);
    assert_eq!(counts.categorized, 2);
}

// ==================== Topics JSON ====================

#[tokio::test]
async fn test_topics_json_roundtrip_through_store() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = ResearcherStore::new(db);

    let topics = vec!["Glaucoma".to_string(), "Retinal Imaging".to_string()];
    let topics_json = Researcher::serialize_topics(&topics);
    let mut profile = NewResearcher::new("A1", "Test");
    profile.topics = topics_json.as_deref();
    store.upsert(&profile).await.unwrap();

    let researcher = store.get("A1").await.unwrap().unwrap();
    assert_eq!(researcher.parse_topics(), topics);
}
