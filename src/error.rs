use crate::services::geolocation::GeolocationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Shown when a route is requested before any start point was chosen
pub const START_NOT_SET_MESSAGE: &str =
    "まず出発地点を設定してください。地図をクリックするか「現在地を取得」ボタンを押してください。";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Start point not set")]
    StartNotSet,

    #[error("Geolocation failed: {0}")]
    Geolocation(#[from] GeolocationError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::StartNotSet => (StatusCode::BAD_REQUEST, START_NOT_SET_MESSAGE),
            AppError::Geolocation(ref e) => {
                let status = match e {
                    GeolocationError::PermissionDenied => StatusCode::FORBIDDEN,
                    GeolocationError::PositionUnavailable => StatusCode::SERVICE_UNAVAILABLE,
                    GeolocationError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                    GeolocationError::Unsupported => StatusCode::NOT_IMPLEMENTED,
                };
                let body = Json(json!({
                    "error": status.canonical_reason().unwrap_or("Unknown error"),
                    "message": e.to_string(),
                    "kind": e.code(),
                }));
                return (status, body).into_response();
            }
            AppError::Storage(ref e) => {
                tracing::warn!("Storage error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Storage error")
            }
            AppError::NotFound(ref e) => (StatusCode::NOT_FOUND, e.as_str()),
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
