use sanpo::constants::{HISTORY_STORAGE_KEY, MAX_HISTORY_ENTRIES};
use sanpo::models::RouteType;
use sanpo::services::history_store::HistoryStore;
use sanpo::services::route_generator::RouteSynthesizer;
use sanpo::storage::{FileStore, KeyValueStore};
use std::sync::Arc;
use time::UtcOffset;

mod common;

#[tokio::test]
async fn test_eleven_records_keep_ten_newest() {
    let dir = tempfile::tempdir().unwrap();
    let history = HistoryStore::new(Arc::new(FileStore::new(dir.path())), UtcOffset::UTC);
    let synthesizer = RouteSynthesizer::new();

    let mut ids = Vec::new();
    for _ in 0..11 {
        let route = synthesizer.generate_route(RouteType::Loop, common::tokyo_station(), 3.0, 5);
        ids.push(history.record_route(&route).await.id);
    }

    let entries = history.list().await;
    assert_eq!(entries.len(), MAX_HISTORY_ENTRIES);
    assert_eq!(entries[0].id, ids[10]);
    assert!(!entries.iter().any(|e| e.id == ids[0]));
}

#[tokio::test]
async fn test_history_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let synthesizer = RouteSynthesizer::new();
    let route = synthesizer.generate_route(RouteType::Random, common::tokyo_station(), 2.0, 4);

    let recorded = {
        let history = HistoryStore::new(Arc::new(FileStore::new(dir.path())), UtcOffset::UTC);
        history.record_route(&route).await
    };

    let reopened = HistoryStore::new(Arc::new(FileStore::new(dir.path())), UtcOffset::UTC);
    let entries = reopened.list().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, recorded.id);
    assert_eq!(entries[0].created_at, recorded.created_at);
    assert_eq!(entries[0].points.len(), route.points.len());
    for (stored, original) in entries[0].points.iter().zip(&route.points) {
        assert!((stored.lat - original.lat).abs() < 1e-12);
        assert!((stored.lng - original.lng).abs() < 1e-12);
    }
    assert_eq!(entries[0].distance_km, format!("{:.2}", route.metrics.distance_km));
    assert_eq!(entries[0].route_type_label, "ランダム探索");
}

#[tokio::test]
async fn test_remove_unknown_id_keeps_order() {
    let dir = tempfile::tempdir().unwrap();
    let history = HistoryStore::new(Arc::new(FileStore::new(dir.path())), UtcOffset::UTC);
    let synthesizer = RouteSynthesizer::new();

    for route_type in RouteType::ALL {
        let route = synthesizer.generate_route(route_type, common::tokyo_station(), 3.0, 5);
        history.record_route(&route).await;
    }
    let before: Vec<i64> = history.list().await.iter().map(|e| e.id).collect();

    history.remove(12345).await;

    let after: Vec<i64> = history.list().await.iter().map(|e| e.id).collect();
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_corrupt_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path()));
    store
        .set(HISTORY_STORAGE_KEY, r#"[{"id": "not a number"}]"#)
        .await
        .unwrap();

    let history = HistoryStore::new(store, UtcOffset::UTC);
    assert!(history.list().await.is_empty());
    assert!(history.get(1).await.is_none());
}

#[tokio::test]
async fn test_unwritable_directory_is_silent() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "a file, not a directory").unwrap();

    let history = HistoryStore::new(Arc::new(FileStore::new(&blocker)), UtcOffset::UTC);
    let synthesizer = RouteSynthesizer::new();
    let route = synthesizer.generate_route(RouteType::Loop, common::tokyo_station(), 3.0, 5);

    let entry = history.record_route(&route).await;
    assert_eq!(entry.points, route.points);
    assert!(history.list().await.is_empty());
}
