//! API route definitions.

use axum::Router;
use changemaker_shared::AppError;

use crate::{AppState, error::ApiError};

pub mod calculate;
pub mod health;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(calculate::routes())
}

/// Fallback for unknown paths.
pub async fn not_found() -> ApiError {
    AppError::NotFound("No such route".to_string()).into()
}
