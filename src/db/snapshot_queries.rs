use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{PortfolioSnapshot, PortfolioTotals};

pub async fn create(
    pool: &PgPool,
    totals: &PortfolioTotals,
) -> Result<PortfolioSnapshot, sqlx::Error> {
    sqlx::query_as::<_, PortfolioSnapshot>(
        "INSERT INTO portfolio_snapshots
         (id, total_value, accounts_value, investments_value, crypto_value, cash_value)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(totals.total)
    .bind(totals.accounts)
    .bind(totals.investments)
    .bind(totals.crypto)
    .bind(totals.cash)
    .fetch_one(pool)
    .await
}

pub async fn fetch_recent(pool: &PgPool, limit: i64) -> Result<Vec<PortfolioSnapshot>, sqlx::Error> {
    sqlx::query_as::<_, PortfolioSnapshot>(
        "SELECT * FROM portfolio_snapshots
         ORDER BY recorded_at DESC
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

// Drops everything past the newest `keep` rows. Existing rows are never
// modified, only discarded wholesale.
pub async fn prune(pool: &PgPool, keep: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "DELETE FROM portfolio_snapshots
         WHERE id IN (
             SELECT id FROM portfolio_snapshots
             ORDER BY recorded_at DESC
             OFFSET $1
         )",
    )
    .bind(keep)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
