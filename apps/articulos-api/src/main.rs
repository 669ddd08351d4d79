use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_articulos::MongoArticuloRepository;
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!(
        "Using MongoDB at {} (database: {})",
        config.mongodb.redacted_url(),
        config.mongodb.database()
    );

    let state = AppState::new(config);

    // First use of the shared client; the service still starts if MongoDB is
    // down and reconnects on the next request
    if let Err(e) = MongoArticuloRepository::new(state.mongo.clone())
        .init_indexes()
        .await
    {
        warn!("Could not ensure articulo indexes: {}", e);
    }

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router = create_router::<openapi::ApiDoc>(api_routes).await?;

    // Probes are outside /api and the API key
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::health::router(state.clone()));

    info!("Starting Articulos API with production-ready shutdown (30s timeout)");

    let mongo = state.mongo.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: releasing MongoDB client");
            mongo.reset().await;
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Articulos API shutdown complete");
    Ok(())
}
