pub mod debug;
pub mod generate;
pub mod history;
pub mod location;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/routes", post(generate::create_route))
        .route(
            "/history",
            get(history::list_history).delete(history::clear_history),
        )
        .route(
            "/history/{id}",
            get(history::restore_history_entry).delete(history::delete_history_entry),
        )
        .route("/history/{id}/geojson", get(history::history_entry_geojson))
        .route(
            "/location",
            get(location::current_location).post(location::report_location),
        )
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
