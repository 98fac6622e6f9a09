//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - Error to HTTP response mapping
//! - Request and response types

pub mod error;
pub mod routes;

use axum::Router;
use changemaker_core::change::ChangeEngine;
use changemaker_shared::AppConfig;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Change-making engine.
    pub engine: Arc<ChangeEngine>,
    /// Permits bounding how many calculations run on the blocking pool.
    pub solver_permits: Arc<Semaphore>,
    /// Maximum accepted request body size in bytes.
    pub body_limit_bytes: usize,
}

impl AppState {
    /// Builds the state from configuration.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            engine: Arc::new(ChangeEngine::new(&config.change)),
            solver_permits: Arc::new(Semaphore::new(config.server.max_concurrent_solves)),
            body_limit_bytes: config.server.body_limit_bytes,
        }
    }
}

/// Creates the main application router.
///
/// Routes are served both at the root, where the browser form posts, and
/// under `/api/v1`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .nest("/api/v1", routes::api_routes())
        .fallback(routes::not_found)
        .layer(RequestBodyLimitLayer::new(state.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
