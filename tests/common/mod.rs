use axum::Router;
use sanpo::models::Coordinates;
use sanpo::services::geolocation::{FixedGeolocator, Geolocator};
use sanpo::services::history_store::HistoryStore;
use sanpo::services::route_generator::RouteSynthesizer;
use sanpo::storage::{KeyValueStore, MemoryStore};
use sanpo::AppState;
use std::sync::Arc;
use std::time::Duration;
use time::UtcOffset;

/// Tokyo Station
#[allow(dead_code)]
pub fn tokyo_station() -> Coordinates {
    Coordinates::new(35.6812, 139.7671).unwrap()
}

/// Build app state over the given store and geolocator
#[allow(dead_code)]
pub fn create_test_state(
    store: Arc<dyn KeyValueStore>,
    geolocator: Arc<dyn Geolocator>,
) -> Arc<AppState> {
    Arc::new(AppState {
        synthesizer: RouteSynthesizer::new(),
        history: HistoryStore::new(store, UtcOffset::UTC),
        geolocator,
        geolocation_timeout: Duration::from_secs(1),
    })
}

/// Router over an in-memory store with a fixed position at Tokyo Station
#[allow(dead_code)]
pub fn setup_test_app() -> Router {
    let state = create_test_state(
        Arc::new(MemoryStore::new()),
        Arc::new(FixedGeolocator::new(Some(tokyo_station()))),
    );
    sanpo::routes::create_router(state)
}
