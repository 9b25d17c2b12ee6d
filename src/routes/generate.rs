use crate::error::Result;
use crate::models::{RouteRequest, RouteResponse};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /routes
/// Generate a walking route from the chosen start point and remember it
pub async fn create_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>> {
    let route = state.synthesizer.generate(&request)?;
    let entry = state.history.record_route(&route).await;

    Ok(Json(RouteResponse {
        route,
        history_id: entry.id,
    }))
}
