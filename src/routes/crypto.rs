use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CreateCryptoHolding, CryptoHolding, UpdateCryptoHolding};
use crate::services::{asset_service, valuation_service};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_crypto))
        .route("/", post(create_crypto))
        .route("/:id", put(update_crypto))
        .route("/:id", delete(delete_crypto))
}

pub async fn list_crypto(
    State(state): State<AppState>,
) -> Result<Json<Vec<CryptoHolding>>, AppError> {
    info!("GET /api/crypto - Listing crypto holdings");
    let holdings =
        valuation_service::list_crypto_with_fresh_prices(&state.pool, state.crypto.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to list crypto holdings: {}", e);
                e
            })?;
    Ok(Json(holdings))
}

pub async fn create_crypto(
    State(state): State<AppState>,
    Json(input): Json<CreateCryptoHolding>,
) -> Result<Json<CryptoHolding>, AppError> {
    info!("POST /api/crypto - Creating crypto holding");
    let holding = asset_service::create_crypto(&state.pool, state.crypto.as_ref(), input)
        .await
        .map_err(|e| {
            error!("Failed to create crypto holding: {}", e);
            e
        })?;
    Ok(Json(holding))
}

pub async fn update_crypto(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateCryptoHolding>,
) -> Result<Json<CryptoHolding>, AppError> {
    info!("PUT /api/crypto/{} - Updating crypto holding", id);
    let holding = asset_service::update_crypto(&state.pool, id, input)
        .await
        .map_err(|e| {
            error!("Failed to update crypto holding {}: {}", id, e);
            e
        })?;
    Ok(Json(holding))
}

pub async fn delete_crypto(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    info!("DELETE /api/crypto/{} - Deleting crypto holding", id);
    asset_service::delete_crypto(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to delete crypto holding {}: {}", id, e);
            e
        })?;
    Ok(StatusCode::NO_CONTENT)
}
