// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod routes;
pub mod services;
pub mod storage;

// Re-export commonly used types
pub use error::{AppError, Result};

use services::geolocation::Geolocator;
use services::history_store::HistoryStore;
use services::route_generator::RouteSynthesizer;
use std::sync::Arc;
use std::time::Duration;

// App state for sharing across the application
pub struct AppState {
    pub synthesizer: RouteSynthesizer,
    pub history: HistoryStore,
    pub geolocator: Arc<dyn Geolocator>,
    pub geolocation_timeout: Duration,
}
