use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{AssetCategory, CreateTransaction, Transaction};

pub async fn create(pool: &PgPool, input: &CreateTransaction) -> Result<Transaction, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(
        "INSERT INTO transactions
         (id, tx_type, asset_type, asset_id, amount, price, quantity, description, occurred_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(input.tx_type)
    .bind(input.asset_type)
    .bind(input.asset_id)
    .bind(input.amount)
    .bind(input.price)
    .bind(input.quantity)
    .bind(&input.description)
    .bind(input.date.unwrap_or_else(chrono::Utc::now))
    .fetch_one(pool)
    .await
}

pub async fn fetch_filtered(
    pool: &PgPool,
    asset_type: Option<AssetCategory>,
    asset_id: Option<Uuid>,
) -> Result<Vec<Transaction>, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(
        "SELECT * FROM transactions
         WHERE ($1::asset_category IS NULL OR asset_type = $1)
           AND ($2::uuid IS NULL OR asset_id = $2)
         ORDER BY occurred_at DESC",
    )
    .bind(asset_type)
    .bind(asset_id)
    .fetch_all(pool)
    .await
}

pub async fn fetch_by_asset(
    pool: &PgPool,
    asset_type: AssetCategory,
    asset_id: Uuid,
) -> Result<Vec<Transaction>, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(
        "SELECT * FROM transactions
         WHERE asset_type = $1 AND asset_id = $2
         ORDER BY occurred_at DESC",
    )
    .bind(asset_type)
    .bind(asset_id)
    .fetch_all(pool)
    .await
}
