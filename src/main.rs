use axum::Router;
use sanpo::config::Config;
use sanpo::services::geolocation::{DisabledGeolocator, FixedGeolocator, Geolocator};
use sanpo::services::history_store::HistoryStore;
use sanpo::services::route_generator::RouteSynthesizer;
use sanpo::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sanpo=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting sanpo route server");
    tracing::info!("Configuration loaded successfully");

    // History backend: Redis, then files, then memory
    let store = sanpo::storage::from_config(&config).await;
    let history = HistoryStore::new(store, config.history_utc_offset());

    let geolocator: Arc<dyn Geolocator> = if config.geolocation.enabled {
        Arc::new(FixedGeolocator::new(config.geolocation.position))
    } else {
        tracing::info!("Geolocation disabled by configuration");
        Arc::new(DisabledGeolocator)
    };

    // Create application state
    let state = Arc::new(AppState {
        synthesizer: RouteSynthesizer::new(),
        history,
        geolocator,
        geolocation_timeout: config.geolocation.timeout(),
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", sanpo::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
