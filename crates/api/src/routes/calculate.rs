//! Change calculation route.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use changemaker_core::change::{Change, Strategy};
use changemaker_shared::{AppError, types::Amount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::{AppState, error::ApiError};

/// Creates the calculation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for a change calculation.
///
/// Amounts may be JSON numbers or decimal strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    /// Amount to make change for.
    pub target_amount: Amount,
    /// Available denominations, each in unlimited supply.
    pub denominations: Vec<Amount>,
}

/// Coin value written as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CoinValue(#[serde(with = "rust_decimal::serde::float")] Decimal);

/// Response for a successful calculation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    /// Selected coins, largest first.
    pub coins_used: Vec<CoinValue>,
    /// Number of coins selected.
    pub coin_count: usize,
    /// Strategy that produced the selection.
    pub strategy: Strategy,
}

impl From<Change> for CalculateResponse {
    fn from(change: Change) -> Self {
        Self {
            coin_count: change.coin_count(),
            coins_used: change
                .coins
                .into_iter()
                .map(|coin| CoinValue(coin.value()))
                .collect(),
            strategy: change.strategy,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /calculate
///
/// Runs the solver on the blocking pool since the dynamic-programming pass is
/// CPU-bound. A permit is held for the whole run, so at most
/// `max_concurrent_solves` calculations occupy the pool at once.
#[axum::debug_handler]
async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;

    let target = request.target_amount;
    let denomination_count = request.denominations.len();
    let engine = Arc::clone(&state.engine);

    let permit = Arc::clone(&state.solver_permits)
        .acquire_owned()
        .await
        .map_err(|e| {
            error!(error = %e, "Solver permits closed");
            AppError::Internal("Change calculation failed".to_string())
        })?;

    let change = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        engine.make_change(request.target_amount, &request.denominations)
    })
    .await
    .map_err(|e| {
        error!(error = %e, "Change calculation task failed");
        AppError::Internal("Change calculation failed".to_string())
    })??;

    info!(
        %target,
        denominations = denomination_count,
        coins = change.coin_count(),
        strategy = %change.strategy,
        "Calculated change"
    );

    Ok(Json(change.into()))
}
