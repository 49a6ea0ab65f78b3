use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Investment, NewInvestment, UpdateInvestment};

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Investment>, sqlx::Error> {
    sqlx::query_as::<_, Investment>("SELECT * FROM investments ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Option<Investment>, sqlx::Error> {
    sqlx::query_as::<_, Investment>("SELECT * FROM investments WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, input: NewInvestment) -> Result<Investment, sqlx::Error> {
    sqlx::query_as::<_, Investment>(
        "INSERT INTO investments (id, symbol, name, shares, purchase_price, current_price, total_value)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(input.symbol)
    .bind(input.name)
    .bind(input.shares)
    .bind(input.purchase_price)
    .bind(input.current_price)
    .bind(input.total_value)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: UpdateInvestment,
) -> Result<Option<Investment>, sqlx::Error> {
    sqlx::query_as::<_, Investment>(
        "UPDATE investments
         SET symbol = COALESCE($2, symbol),
             name = COALESCE($3, name),
             shares = COALESCE($4, shares),
             purchase_price = COALESCE($5, purchase_price),
             dividends = COALESCE($6, dividends),
             updated_at = now()
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(input.symbol)
    .bind(input.name)
    .bind(input.shares)
    .bind(input.purchase_price)
    .bind(input.dividends)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM investments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

// Quote refresh writes price and mark together; a failed quote leaves both
// columns untouched.
pub async fn update_market_price(
    pool: &PgPool,
    id: Uuid,
    current_price: f64,
    total_value: f64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE investments
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
    shares: f64,
    purchase_price: f64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE investments
         SET shares = $2, purchase_price = $3, updated_at = now()
         WHERE id = $1",
    )
    .bind(id)
    .bind(shares)
    .bind(purchase_price)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

// The shares >= quantity guard keeps a concurrent oversell from driving the
// position negative; cost basis is deliberately left unchanged.
pub async fn apply_sell(pool: &PgPool, id: Uuid, quantity: f64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE investments
         SET shares = shares - $2, updated_at = now()
         WHERE id = $1 AND shares >= $2",
    )
    .bind(id)
    .bind(quantity)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn add_dividends(pool: &PgPool, id: Uuid, amount: f64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE investments
         SET dividends = dividends + $2, updated_at = now()
         WHERE id = $1",
    )
    .bind(id)
    .bind(amount)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
