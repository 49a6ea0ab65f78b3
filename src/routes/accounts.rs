use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tracing::{error, info};
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{Account, CreateAccount, UpdateAccount};
use crate::services::asset_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_accounts))
        .route("/", post(create_account))
        .route("/:id", put(update_account))
        .route("/:id", delete(delete_account))
}

pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Account>>, AppError> {
    info!("GET /api/accounts - Listing accounts");
    let accounts = db::account_queries::fetch_all(&state.pool)
        .await
        .map_err(|e| {
            error!("Failed to list accounts: {}", e);
            AppError::Db(e)
        })?;
    Ok(Json(accounts))
}

pub async fn create_account(
    State(state): State<AppState>,
    Json(input): Json<CreateAccount>,
) -> Result<Json<Account>, AppError> {
    info!("POST /api/accounts - Creating account");
    let account = asset_service::create_account(&state.pool, input)
        .await
        .map_err(|e| {
            error!("Failed to create account: {}", e);
            e
        })?;
    Ok(Json(account))
}

pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateAccount>,
) -> Result<Json<Account>, AppError> {
    info!("PUT /api/accounts/{} - Updating account", id);
    let account = asset_service::update_account(&state.pool, id, input)
        .await
        .map_err(|e| {
            error!("Failed to update account {}: {}", id, e);
            e
        })?;
    Ok(Json(account))
}

pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    info!("DELETE /api/accounts/{} - Deleting account", id);
    asset_service::delete_account(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to delete account {}: {}", id, e);
            e
        })?;
    Ok(StatusCode::NO_CONTENT)
}
