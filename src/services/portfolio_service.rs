use sqlx::PgPool;
use tracing::info;

use crate::db;
use crate::errors::AppError;
use crate::external::quote_provider::QuoteProvider;
use crate::models::{
    Account, CashHolding, CryptoHolding, Investment, PortfolioOverview, PortfolioSnapshot,
    PortfolioTotals, UpdatedCounts, UpdatePricesReport,
};
use crate::services::valuation_service;

/// How many snapshots the history endpoint serves.
const HISTORY_WINDOW: i64 = 30;

/// Sum the four category ledgers. Positions without a recorded market value
/// contribute their cost basis.
pub fn compute_totals(
    accounts: &[Account],
    investments: &[Investment],
    crypto: &[CryptoHolding],
    cash: &[CashHolding],
) -> PortfolioTotals {
    let accounts_total: f64 = accounts.iter().map(|a| a.balance).sum();
    let investments_total: f64 = investments.iter().map(Investment::market_value).sum();
    let crypto_total: f64 = crypto.iter().map(CryptoHolding::market_value).sum();
    let cash_total: f64 = cash.iter().map(|c| c.amount).sum();

    PortfolioTotals {
        total: accounts_total + investments_total + crypto_total + cash_total,
        accounts: accounts_total,
        investments: investments_total,
        crypto: crypto_total,
        cash: cash_total,
    }
}

pub async fn overview(
    pool: &PgPool,
    stocks: &dyn QuoteProvider,
    crypto_quotes: &dyn QuoteProvider,
    update_prices: bool,
) -> Result<PortfolioOverview, AppError> {
    if update_prices {
        valuation_service::refresh_investment_prices(pool, stocks).await?;
        valuation_service::refresh_crypto_prices(pool, crypto_quotes).await?;
    }

    let accounts = db::account_queries::fetch_all(pool).await?;
    let investments = db::investment_queries::fetch_all(pool).await?;
    let crypto = db::crypto_queries::fetch_all(pool).await?;
    let cash = db::cash_queries::fetch_all(pool).await?;

    let totals = compute_totals(&accounts, &investments, &crypto, &cash);

    // History only grows when fresh marks were taken; a cached read does
    // not produce a new point.
    if update_prices {
        record_snapshot(pool, &totals).await?;
    }

    Ok(PortfolioOverview {
        total: totals.total,
        breakdown: totals.into(),
        accounts,
        investments,
        crypto,
        cash,
    })
}

pub async fn update_all_prices(
    pool: &PgPool,
    stocks: &dyn QuoteProvider,
    crypto_quotes: &dyn QuoteProvider,
) -> Result<UpdatePricesReport, AppError> {
    let investments_updated = valuation_service::refresh_investment_prices(pool, stocks).await?;
    let crypto_updated = valuation_service::refresh_crypto_prices(pool, crypto_quotes).await?;

    let accounts = db::account_queries::fetch_all(pool).await?;
    let investments = db::investment_queries::fetch_all(pool).await?;
    let crypto = db::crypto_queries::fetch_all(pool).await?;
    let cash = db::cash_queries::fetch_all(pool).await?;

    let totals = compute_totals(&accounts, &investments, &crypto, &cash);
    record_snapshot(pool, &totals).await?;

    Ok(UpdatePricesReport {
        updated: UpdatedCounts {
            investments: investments_updated,
            crypto: crypto_updated,
        },
        totals,
    })
}

pub async fn record_snapshot(
    pool: &PgPool,
    totals: &PortfolioTotals,
) -> Result<PortfolioSnapshot, AppError> {
    let snapshot = db::snapshot_queries::create(pool, totals).await?;
    let pruned = db::snapshot_queries::prune(pool, snapshot_retention()).await?;
    if pruned > 0 {
        info!("pruned {} snapshots past the retention window", pruned);
    }
    Ok(snapshot)
}

pub async fn history(pool: &PgPool) -> Result<Vec<PortfolioSnapshot>, AppError> {
    let mut snapshots = db::snapshot_queries::fetch_recent(pool, HISTORY_WINDOW).await?;
    // Newest window, oldest first for the chart.
    snapshots.reverse();
    Ok(snapshots)
}

fn snapshot_retention() -> i64 {
    std::env::var("SNAPSHOT_RETENTION")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(365)
}
