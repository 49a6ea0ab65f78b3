use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{AssetCategory, CreateTransaction, Transaction, TransactionWithAsset};
use crate::services::ledger_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_transactions))
        .route("/", post(create_transaction))
        .route("/:asset_type/:asset_id", get(list_for_asset))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    pub asset_type: Option<AssetCategory>,
    pub asset_id: Option<Uuid>,
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Query(filter): Query<TransactionFilter>,
) -> Result<Json<Vec<TransactionWithAsset>>, AppError> {
    info!("GET /api/transactions - Listing transactions");
    let transactions =
        ledger_service::list_transactions(&state.pool, filter.asset_type, filter.asset_id)
            .await
            .map_err(|e| {
                error!("Failed to list transactions: {}", e);
                e
            })?;
    Ok(Json(transactions))
}

pub async fn create_transaction(
    State(state): State<AppState>,
    Json(input): Json<CreateTransaction>,
) -> Result<Json<Transaction>, AppError> {
    info!(
        "POST /api/transactions - Recording {} {} for asset {}",
        input.asset_type, input.tx_type, input.asset_id
    );
    let transaction = ledger_service::create_transaction(&state.pool, input)
        .await
        .map_err(|e| {
            error!("Failed to record transaction: {}", e);
            e
        })?;
    Ok(Json(transaction))
}

pub async fn list_for_asset(
    State(state): State<AppState>,
    Path((asset_type, asset_id)): Path<(AssetCategory, Uuid)>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    info!(
        "GET /api/transactions/{}/{} - Listing asset transactions",
        asset_type, asset_id
    );
    let transactions = ledger_service::list_for_asset(&state.pool, asset_type, asset_id)
        .await
        .map_err(|e| {
            error!("Failed to list transactions for {}: {}", asset_id, e);
            e
        })?;
    Ok(Json(transactions))
}
