use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check if services are working
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let backend = state.history.backend();

    let mut status = json!({
        "status": "ok",
        "checks": {
            "geolocator": state.geolocator.name(),
        }
    });

    // History storage is best effort, so an unhealthy store degrades rather than fails
    if backend.health_check().await {
        status["checks"]["storage"] = json!({"backend": backend.backend_name(), "status": "ok"});
    } else {
        status["checks"]["storage"] =
            json!({"backend": backend.backend_name(), "status": "unavailable"});
        status["status"] = json!("degraded");
    }

    Json(status)
}
