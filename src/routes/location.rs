use crate::error::Result;
use crate::models::Coordinates;
use crate::services::geolocation::{self, PositionReport};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /location
/// Current position from the configured geolocator. Each failure kind has its
/// own status code and message; nothing is retried.
pub async fn current_location(State(state): State<Arc<AppState>>) -> Result<Json<Coordinates>> {
    let coords = geolocation::locate(state.geolocator.as_ref(), state.geolocation_timeout).await?;
    Ok(Json(coords))
}

/// POST /location
/// Result of a lookup the client ran on its own device. Echoes a valid
/// position; a reported error code comes back as that kind's status and message.
pub async fn report_location(Json(report): Json<PositionReport>) -> Result<Json<Coordinates>> {
    let coords = report.resolve()?;
    Ok(Json(coords))
}
