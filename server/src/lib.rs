//! Artsel Server - backend for the artwork selection table.
//!
//! The browser renders the table; this server owns the selection state.
//! It fetches catalog pages, sequences overlapping page changes, and answers
//! every table event (page change, checkbox change, apply) with the view to
//! render, computed by the artsel-engine reconciliation logic.

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod sessions;

use crate::catalog::CatalogSource;
use crate::config::Config;
use crate::sessions::SessionManager;
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<dyn CatalogSource>,
    pub sessions: Arc<SessionManager>,
}

impl AppState {
    pub fn new(config: Config, catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
            sessions: SessionManager::new_shared(),
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

#[cfg(test)]
pub(crate) fn test_state(catalog: catalog::testing::FakeCatalog) -> AppState {
    let config = Config::from_lookup(|_| None).expect("default config is valid");
    AppState::new(config, Arc::new(catalog))
}
