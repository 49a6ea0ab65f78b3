use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CryptoHolding, NewCryptoHolding, UpdateCryptoHolding};

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<CryptoHolding>, sqlx::Error> {
    sqlx::query_as::<_, CryptoHolding>("SELECT * FROM crypto_holdings ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Option<CryptoHolding>, sqlx::Error> {
    sqlx::query_as::<_, CryptoHolding>("SELECT * FROM crypto_holdings WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, input: NewCryptoHolding) -> Result<CryptoHolding, sqlx::Error> {
    sqlx::query_as::<_, CryptoHolding>(
        "INSERT INTO crypto_holdings (id, symbol, name, amount, purchase_price, current_price, total_value)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(input.symbol)
    .bind(input.name)
    .bind(input.amount)
    .bind(input.purchase_price)
    .bind(input.current_price)
    .bind(input.total_value)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: UpdateCryptoHolding,
) -> Result<Option<CryptoHolding>, sqlx::Error> {
    sqlx::query_as::<_, CryptoHolding>(
        "UPDATE crypto_holdings
         SET symbol = COALESCE($2, symbol),
             name = COALESCE($3, name),
             amount = COALESCE($4, amount),
             purchase_price = COALESCE($5, purchase_price),
             updated_at = now()
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(input.symbol)
    .bind(input.name)
    .bind(input.amount)
    .bind(input.purchase_price)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM crypto_holdings WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn update_market_price(
    pool: &PgPool,
    id: Uuid,
    current_price: f64,
    total_value: f64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE crypto_holdings
         SET current_price = $2, total_value = $3, updated_at = now()
         WHERE id = $1",
    )
    .bind(id)
    .bind(current_price)
    .bind(total_value)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn apply_buy(
    pool: &PgPool,
    id: Uuid,
    amount: f64,
    purchase_price: f64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE crypto_holdings
         SET amount = $2, purchase_price = $3, updated_at = now()
         WHERE id = $1",
    )
    .bind(id)
    .bind(amount)
    .bind(purchase_price)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn apply_sell(pool: &PgPool, id: Uuid, quantity: f64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE crypto_holdings
         SET amount = amount - $2, updated_at = now()
         WHERE id = $1 AND amount >= $2",
    )
    .bind(id)
    .bind(quantity)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
