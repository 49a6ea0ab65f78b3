use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::AppError;
use crate::external::quote_provider::AssetMatch;
use crate::services::market_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(search_assets))
        .route("/price", get(get_price))
        .route("/price-by-name", get(get_price_by_name))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub symbol: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PriceByNameQuery {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
}

/// `null` price means no quote is available for the identifier.
#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub price: Option<f64>,
}

pub async fn search_assets(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<AssetMatch>>, AppError> {
    let q = query.q.unwrap_or_default();
    info!("GET /api/assets/search - Searching {:?}", q);

    let provider = match query.asset_type.as_deref() {
        Some("stocks") => state.stocks.as_ref(),
        Some("crypto") => state.crypto.as_ref(),
        _ => {
            return Err(AppError::Validation(
                "type must be 'stocks' or 'crypto'".to_string(),
            ))
        }
    };

    let matches = market_service::search(provider, &q).await.map_err(|e| {
        error!("Asset search failed: {}", e);
        e
    })?;
    Ok(Json(matches))
}

pub async fn get_price(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<PriceResponse>, AppError> {
    let (Some(symbol), Some(asset_type)) = (query.symbol, query.asset_type) else {
        return Err(AppError::Validation("Missing symbol or type".to_string()));
    };
    info!("GET /api/assets/price - Quoting {} ({})", symbol, asset_type);

    let provider = match asset_type.as_str() {
        "stock" => state.stocks.as_ref(),
        "crypto" => state.crypto.as_ref(),
        _ => {
            return Err(AppError::Validation(
                "type must be 'stock' or 'crypto'".to_string(),
            ))
        }
    };

    let price = market_service::quote(provider, &symbol).await;
    Ok(Json(PriceResponse { price }))
}

pub async fn get_price_by_name(
    State(state): State<AppState>,
    Query(query): Query<PriceByNameQuery>,
) -> Result<Json<PriceResponse>, AppError> {
    let (Some(name), Some(asset_type)) = (query.name, query.asset_type) else {
        return Err(AppError::Validation("Missing name or type".to_string()));
    };
    info!(
        "GET /api/assets/price-by-name - Resolving {:?} ({})",
        name, asset_type
    );

    let provider = match asset_type.as_str() {
        "investment" => state.stocks.as_ref(),
        "crypto" => state.crypto.as_ref(),
        _ => {
            return Err(AppError::Validation(
                "type must be 'investment' or 'crypto'".to_string(),
            ))
        }
    };

    let price = market_service::quote_by_name(provider, &name).await;
    Ok(Json(PriceResponse { price }))
}
