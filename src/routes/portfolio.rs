use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{PortfolioOverview, PortfolioSnapshot, UpdatePricesReport};
use crate::services::portfolio_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_portfolio))
        .route("/history", get(get_history))
        .route("/update-prices", post(update_prices))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioQuery {
    #[serde(default)]
    pub update_prices: bool,
}

pub async fn get_portfolio(
    State(state): State<AppState>,
    Query(query): Query<PortfolioQuery>,
) -> Result<Json<PortfolioOverview>, AppError> {
    info!(
        "GET /api/portfolio - Computing portfolio (updatePrices={})",
        query.update_prices
    );
    let overview = portfolio_service::overview(
        &state.pool,
        state.stocks.as_ref(),
        state.crypto.as_ref(),
        query.update_prices,
    )
    .await
    .map_err(|e| {
        error!("Failed to compute portfolio: {}", e);
        e
    })?;
    Ok(Json(overview))
}

pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<PortfolioSnapshot>>, AppError> {
    info!("GET /api/portfolio/history - Fetching portfolio history");
    let history = portfolio_service::history(&state.pool).await.map_err(|e| {
        error!("Failed to fetch portfolio history: {}", e);
        e
    })?;
    Ok(Json(history))
}

pub async fn update_prices(
    State(state): State<AppState>,
) -> Result<Json<UpdatePricesReport>, AppError> {
    info!("POST /api/portfolio/update-prices - Refreshing all prices");
    let report = portfolio_service::update_all_prices(
        &state.pool,
        state.stocks.as_ref(),
        state.crypto.as_ref(),
    )
    .await
    .map_err(|e| {
        error!("Failed to update prices: {}", e);
        e
    })?;
    Ok(Json(report))
}
