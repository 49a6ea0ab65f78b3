use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Account, CreateAccount, UpdateAccount};

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>("SELECT * FROM accounts ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, input: CreateAccount) -> Result<Account, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "INSERT INTO accounts (id, name, bank, balance, currency)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(input.name)
    .bind(input.bank)
    .bind(input.balance)
    .bind(input.currency)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: UpdateAccount,
) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "UPDATE accounts
         SET name = COALESCE($2, name),
             bank = COALESCE($3, bank),
             balance = COALESCE($4, balance),
             currency = COALESCE($5, currency),
             updated_at = now()
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(input.name)
    .bind(input.bank)
    .bind(input.balance)
    .bind(input.currency)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

// Delta applied in the database so concurrent writers serialize on the row.
pub async fn adjust_balance(
    pool: &PgPool,
    id: Uuid,
    delta: f64,
) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "UPDATE accounts
         SET balance = balance + $2, updated_at = now()
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(delta)
    .fetch_optional(pool)
    .await
}
