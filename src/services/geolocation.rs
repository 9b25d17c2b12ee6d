use crate::error::{AppError, Result as AppResult};
use crate::models::Coordinates;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Why a position lookup failed. Each kind has its own user-facing message;
/// lookups are never retried automatically.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("位置情報の使用が許可されていません。")]
    PermissionDenied,

    #[error("位置情報を取得できませんでした。")]
    PositionUnavailable,

    #[error("位置情報の取得がタイムアウトしました。")]
    Timeout,

    #[error("お使いの環境は位置情報に対応していません。")]
    Unsupported,
}

impl GeolocationError {
    /// Map a W3C `GeolocationPositionError.code`.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1 => Some(GeolocationError::PermissionDenied),
            2 => Some(GeolocationError::PositionUnavailable),
            3 => Some(GeolocationError::Timeout),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            GeolocationError::PermissionDenied => "permission_denied",
            GeolocationError::PositionUnavailable => "position_unavailable",
            GeolocationError::Timeout => "timeout",
            GeolocationError::Unsupported => "unsupported",
        }
    }
}

/// Source of the device's current position
#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError>;

    fn name(&self) -> &'static str;
}

/// Ask `geolocator` for a position, giving up after `timeout`.
pub async fn locate(geolocator: &dyn Geolocator, timeout: Duration) -> AppResult<Coordinates> {
    let position = match tokio::time::timeout(timeout, geolocator.current_position()).await {
        Ok(result) => result,
        Err(_) => Err(GeolocationError::Timeout),
    };

    match position {
        Ok(coords) => {
            tracing::debug!(
                "{} geolocator returned ({:.4}, {:.4})",
                geolocator.name(),
                coords.lat,
                coords.lng
            );
            Ok(coords)
        }
        Err(e) => {
            tracing::info!(kind = e.code(), "{} geolocator failed: {}", geolocator.name(), e);
            Err(e.into())
        }
    }
}

/// Outcome of a lookup done on the client's own device, as reported back by
/// the client: either a position or a W3C `GeolocationPositionError.code`.
/// A report with neither means the device has no geolocation support.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PositionReport {
    #[serde(default)]
    pub position: Option<Coordinates>,
    #[serde(default)]
    pub error_code: Option<u16>,
}

impl PositionReport {
    pub fn resolve(&self) -> AppResult<Coordinates> {
        if let Some(code) = self.error_code {
            let kind = GeolocationError::from_code(code).ok_or_else(|| {
                AppError::InvalidRequest(format!("Unknown geolocation error code: {}", code))
            })?;
            tracing::info!(kind = kind.code(), "Client geolocation failed: {}", kind);
            return Err(kind.into());
        }

        match self.position {
            Some(p) => Coordinates::new(p.lat, p.lng).map_err(AppError::InvalidRequest),
            None => Err(GeolocationError::Unsupported.into()),
        }
    }
}

/// Always reports one configured position. Without one, the position is
/// unavailable.
pub struct FixedGeolocator {
    position: Option<Coordinates>,
}

impl FixedGeolocator {
    pub fn new(position: Option<Coordinates>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        self.position.ok_or(GeolocationError::PositionUnavailable)
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Geolocation switched off by configuration
pub struct DisabledGeolocator;

#[async_trait]
impl Geolocator for DisabledGeolocator {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        Err(GeolocationError::PermissionDenied)
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}
