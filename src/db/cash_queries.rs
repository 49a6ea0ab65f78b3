use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CashHolding, CreateCashHolding, UpdateCashHolding};

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<CashHolding>, sqlx::Error> {
    sqlx::query_as::<_, CashHolding>("SELECT * FROM cash_holdings ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Option<CashHolding>, sqlx::Error> {
    sqlx::query_as::<_, CashHolding>("SELECT * FROM cash_holdings WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, input: CreateCashHolding) -> Result<CashHolding, sqlx::Error> {
    sqlx::query_as::<_, CashHolding>(
        "INSERT INTO cash_holdings (id, name, amount, currency, location)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(input.name)
    .bind(input.amount)
    .bind(input.currency)
    .bind(input.location)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: UpdateCashHolding,
) -> Result<Option<CashHolding>, sqlx::Error> {
    sqlx::query_as::<_, CashHolding>(
        "UPDATE cash_holdings
         SET name = COALESCE($2, name),
             amount = COALESCE($3, amount),
             currency = COALESCE($4, currency),
             location = COALESCE($5, location),
             updated_at = now()
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(input.name)
    .bind(input.amount)
    .bind(input.currency)
    .bind(input.location)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM cash_holdings WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn adjust_amount(
    pool: &PgPool,
    id: Uuid,
    delta: f64,
) -> Result<Option<CashHolding>, sqlx::Error> {
    sqlx::query_as::<_, CashHolding>(
        "UPDATE cash_holdings
         SET amount = amount + $2, updated_at = now()
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(delta)
    .fetch_optional(pool)
    .await
}
