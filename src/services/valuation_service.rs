use futures::future;
use sqlx::PgPool;
use tracing::{error, info, warn};

use crate::db;
use crate::errors::AppError;
use crate::external::quote_provider::QuoteProvider;
use crate::models::{CryptoHolding, Investment};

/// Refresh quotes for every investment. Lookups fan out concurrently and
/// fail independently; a symbol with no quote keeps whatever values it
/// already had. Returns how many positions were updated.
pub async fn refresh_investment_prices(
    pool: &PgPool,
    provider: &dyn QuoteProvider,
) -> Result<u64, AppError> {
    let investments = db::investment_queries::fetch_all(pool).await?;
    let quotes =
        future::join_all(investments.iter().map(|inv| provider.quote(&inv.symbol))).await;

    let mut updated = 0;
    for (investment, quote) in investments.iter().zip(quotes) {
        match quote {
            Ok(price) => {
                let total_value = price * investment.shares;
                match db::investment_queries::update_market_price(
                    pool,
                    investment.id,
                    price,
                    total_value,
                )
                .await
                {
                    Ok(_) => {
                        updated += 1;
                        info!(
                            "updated {}: {:.2} (total {:.2})",
                            investment.symbol, price, total_value
                        );
                    }
                    Err(e) => error!("failed to store price for {}: {}", investment.symbol, e),
                }
            }
            Err(e) => warn!("no quote for {}: {}", investment.symbol, e),
        }
    }
    Ok(updated)
}

pub async fn refresh_crypto_prices(
    pool: &PgPool,
    provider: &dyn QuoteProvider,
) -> Result<u64, AppError> {
    let holdings = db::crypto_queries::fetch_all(pool).await?;
    let quotes = future::join_all(holdings.iter().map(|h| provider.quote(&h.symbol))).await;

    let mut updated = 0;
    for (holding, quote) in holdings.iter().zip(quotes) {
        match quote {
            Ok(price) => {
                let total_value = price * holding.amount;
                match db::crypto_queries::update_market_price(pool, holding.id, price, total_value)
                    .await
                {
                    Ok(_) => {
                        updated += 1;
                        info!(
                            "updated {}: {:.2} (total {:.2})",
                            holding.symbol, price, total_value
                        );
                    }
                    Err(e) => error!("failed to store price for {}: {}", holding.symbol, e),
                }
            }
            Err(e) => warn!("no quote for {}: {}", holding.symbol, e),
        }
    }
    Ok(updated)
}

pub async fn list_investments_with_fresh_prices(
    pool: &PgPool,
    provider: &dyn QuoteProvider,
) -> Result<Vec<Investment>, AppError> {
    refresh_investment_prices(pool, provider).await?;
    Ok(db::investment_queries::fetch_all(pool).await?)
}

pub async fn list_crypto_with_fresh_prices(
    pool: &PgPool,
    provider: &dyn QuoteProvider,
) -> Result<Vec<CryptoHolding>, AppError> {
    refresh_crypto_prices(pool, provider).await?;
    Ok(db::crypto_queries::fetch_all(pool).await?)
}
