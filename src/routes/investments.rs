use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CreateInvestment, Investment, UpdateInvestment};
use crate::services::{asset_service, valuation_service};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_investments))
        .route("/", post(create_investment))
        .route("/:id", put(update_investment))
        .route("/:id", delete(delete_investment))
}

// Listing refreshes quotes first so the table always shows current marks;
// symbols without a quote fall back to their stored values.
pub async fn list_investments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Investment>>, AppError> {
    info!("GET /api/investments - Listing investments");
    let investments =
        valuation_service::list_investments_with_fresh_prices(&state.pool, state.stocks.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to list investments: {}", e);
                e
            })?;
    Ok(Json(investments))
}

pub async fn create_investment(
    State(state): State<AppState>,
    Json(input): Json<CreateInvestment>,
) -> Result<Json<Investment>, AppError> {
    info!("POST /api/investments - Creating investment");
    let investment =
        asset_service::create_investment(&state.pool, state.stocks.as_ref(), input)
            .await
            .map_err(|e| {
                error!("Failed to create investment: {}", e);
                e
            })?;
    Ok(Json(investment))
}

pub async fn update_investment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateInvestment>,
) -> Result<Json<Investment>, AppError> {
    info!("PUT /api/investments/{} - Updating investment", id);
    let investment = asset_service::update_investment(&state.pool, id, input)
        .await
        .map_err(|e| {
            error!("Failed to update investment {}: {}", id, e);
            e
        })?;
    Ok(Json(investment))
}

pub async fn delete_investment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    info!("DELETE /api/investments/{} - Deleting investment", id);
    asset_service::delete_investment(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to delete investment {}: {}", id, e);
            e
        })?;
    Ok(StatusCode::NO_CONTENT)
}
