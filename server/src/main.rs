//! Artsel Server entry point.

use std::sync::Arc;
use std::time::Duration;

use artsel_server::catalog::HttpCatalog;
use artsel_server::config::Config;
use artsel_server::{build_router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How often idle sessions are swept.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "artsel_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Starting Artsel Server on {}:{}", config.host, config.port);
    tracing::info!(catalog = %config.catalog_url, "Using artwork catalog");

    let catalog = HttpCatalog::new(config.catalog_url.clone(), config.catalog_timeout)?;

    // Build application state
    let state = AppState::new(config.clone(), Arc::new(catalog));
    let _sweeper = state
        .sessions
        .spawn_sweeper(config.session_ttl, SWEEP_INTERVAL);

    let app = build_router(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
