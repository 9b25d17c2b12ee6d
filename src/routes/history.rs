use crate::error::{AppError, Result};
use crate::models::{HistoryEntry, RestoredRoute};
use crate::services::route_export::history_entry_to_geojson;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use geojson::FeatureCollection;
use std::sync::Arc;

/// GET /history
pub async fn list_history(State(state): State<Arc<AppState>>) -> Json<Vec<HistoryEntry>> {
    Json(state.history.list().await)
}

/// GET /history/{id}
/// Bring a stored route back with freshly measured distance and time
pub async fn restore_history_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<RestoredRoute>> {
    state
        .history
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("History entry {} not found", id)))
}

/// GET /history/{id}/geojson
pub async fn history_entry_geojson(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<FeatureCollection>> {
    let restored = state
        .history
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("History entry {} not found", id)))?;

    Ok(Json(history_entry_to_geojson(&restored.entry)))
}

/// DELETE /history/{id}
/// Unknown ids succeed too
pub async fn delete_history_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> StatusCode {
    state.history.remove(id).await;
    StatusCode::NO_CONTENT
}

/// DELETE /history
pub async fn clear_history(State(state): State<Arc<AppState>>) -> StatusCode {
    state.history.clear().await;
    StatusCode::NO_CONTENT
}
