use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tracing::{error, info};
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{CashHolding, CreateCashHolding, UpdateCashHolding};
use crate::services::asset_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cash))
        .route("/", post(create_cash))
        .route("/:id", put(update_cash))
        .route("/:id", delete(delete_cash))
}

pub async fn list_cash(
    State(state): State<AppState>,
) -> Result<Json<Vec<CashHolding>>, AppError> {
    info!("GET /api/cash - Listing cash holdings");
    let cash = db::cash_queries::fetch_all(&state.pool).await.map_err(|e| {
        error!("Failed to list cash holdings: {}", e);
        AppError::Db(e)
    })?;
    Ok(Json(cash))
}

pub async fn create_cash(
    State(state): State<AppState>,
    Json(input): Json<CreateCashHolding>,
) -> Result<Json<CashHolding>, AppError> {
    info!("POST /api/cash - Creating cash holding");
    let cash = asset_service::create_cash(&state.pool, input)
        .await
        .map_err(|e| {
            error!("Failed to create cash holding: {}", e);
            e
        })?;
    Ok(Json(cash))
}

pub async fn update_cash(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateCashHolding>,
) -> Result<Json<CashHolding>, AppError> {
    info!("PUT /api/cash/{} - Updating cash holding", id);
    let cash = asset_service::update_cash(&state.pool, id, input)
        .await
        .map_err(|e| {
            error!("Failed to update cash holding {}: {}", id, e);
            e
        })?;
    Ok(Json(cash))
}

pub async fn delete_cash(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    info!("DELETE /api/cash/{} - Deleting cash holding", id);
    asset_service::delete_cash(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to delete cash holding {}: {}", id, e);
            e
        })?;
    Ok(StatusCode::NO_CONTENT)
}
