use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::external::quote_provider::QuoteProvider;
use crate::models::{
    Account, CashHolding, CreateAccount, CreateCashHolding, CreateCryptoHolding, CreateInvestment,
    CryptoHolding, Investment, NewCryptoHolding, NewInvestment, UpdateAccount, UpdateCashHolding,
    UpdateCryptoHolding, UpdateInvestment,
};
use crate::services::market_service;

/// Quantity and prices a new investment/crypto row will be created with,
/// once quote lookup and total-amount conversion have run.
#[derive(Debug, PartialEq)]
pub struct ResolvedHolding {
    pub quantity: f64,
    pub purchase_price: f64,
    pub current_price: Option<f64>,
    pub total_value: Option<f64>,
}

/// Resolve creation inputs. A `totalAmount` plus a live quote buys
/// `totalAmount / quote` units at the quote; otherwise the caller-provided
/// quantity and purchase price are used as-is. The last known price
/// defaults to the purchase price so a brand-new position always carries a
/// mark.
pub fn resolve_new_holding(
    quantity: Option<f64>,
    purchase_price: Option<f64>,
    total_amount: Option<f64>,
    quote: Option<f64>,
) -> Result<ResolvedHolding, AppError> {
    let (quantity, purchase_price) = match (total_amount, quote) {
        (Some(total), Some(q)) if q > 0.0 => (total / q, q),
        _ => match (quantity, purchase_price) {
            (Some(qty), Some(price)) => (qty, price),
            _ => {
                return Err(AppError::Validation(
                    "Either a quantity and purchase price or a total amount is required"
                        .to_string(),
                ))
            }
        },
    };
    if !quantity.is_finite() || !purchase_price.is_finite() || quantity < 0.0 || purchase_price < 0.0
    {
        return Err(AppError::Validation(
            "Quantity and price must be non-negative numbers".to_string(),
        ));
    }
    let current_price = quote.unwrap_or(purchase_price);
    Ok(ResolvedHolding {
        quantity,
        purchase_price,
        current_price: Some(current_price),
        total_value: Some(quantity * current_price),
    })
}

fn require_nonempty(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(())
}

fn require_finite(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::Validation(format!(
            "{} must be a finite number",
            field
        )));
    }
    Ok(())
}

pub async fn create_account(pool: &PgPool, input: CreateAccount) -> Result<Account, AppError> {
    require_nonempty(&input.name, "Name")?;
    require_nonempty(&input.bank, "Bank")?;
    require_finite(input.balance, "Balance")?;
    Ok(db::account_queries::create(pool, input).await?)
}

pub async fn update_account(
    pool: &PgPool,
    id: Uuid,
    input: UpdateAccount,
) -> Result<Account, AppError> {
    db::account_queries::update(pool, id, input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Account {} not found", id)))
}

pub async fn delete_account(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    match db::account_queries::delete(pool, id).await? {
        0 => Err(AppError::NotFound(format!("Account {} not found", id))),
        _ => Ok(()),
    }
}

pub async fn create_cash(pool: &PgPool, input: CreateCashHolding) -> Result<CashHolding, AppError> {
    require_nonempty(&input.name, "Name")?;
    require_finite(input.amount, "Amount")?;
    Ok(db::cash_queries::create(pool, input).await?)
}

pub async fn update_cash(
    pool: &PgPool,
    id: Uuid,
    input: UpdateCashHolding,
) -> Result<CashHolding, AppError> {
    db::cash_queries::update(pool, id, input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Cash holding {} not found", id)))
}

pub async fn delete_cash(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    match db::cash_queries::delete(pool, id).await? {
        0 => Err(AppError::NotFound(format!("Cash holding {} not found", id))),
        _ => Ok(()),
    }
}

pub async fn create_investment(
    pool: &PgPool,
    provider: &dyn QuoteProvider,
    input: CreateInvestment,
) -> Result<Investment, AppError> {
    require_nonempty(&input.symbol, "Symbol")?;
    require_nonempty(&input.name, "Name")?;

    let quote = market_service::quote(provider, &input.symbol).await;
    let resolved =
        resolve_new_holding(input.shares, input.purchase_price, input.total_amount, quote)?;

    Ok(db::investment_queries::create(
        pool,
        NewInvestment {
            symbol: input.symbol,
            name: input.name,
            shares: resolved.quantity,
            purchase_price: resolved.purchase_price,
            current_price: resolved.current_price,
            total_value: resolved.total_value,
        },
    )
    .await?)
}

pub async fn update_investment(
    pool: &PgPool,
    id: Uuid,
    input: UpdateInvestment,
) -> Result<Investment, AppError> {
    db::investment_queries::update(pool, id, input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Investment {} not found", id)))
}

pub async fn delete_investment(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    match db::investment_queries::delete(pool, id).await? {
        0 => Err(AppError::NotFound(format!("Investment {} not found", id))),
        _ => Ok(()),
    }
}

pub async fn create_crypto(
    pool: &PgPool,
    provider: &dyn QuoteProvider,
    input: CreateCryptoHolding,
) -> Result<CryptoHolding, AppError> {
    require_nonempty(&input.symbol, "Symbol")?;
    require_nonempty(&input.name, "Name")?;

    let quote = market_service::quote(provider, &input.symbol).await;
    let resolved =
        resolve_new_holding(input.amount, input.purchase_price, input.total_amount, quote)?;

    Ok(db::crypto_queries::create(
        pool,
        NewCryptoHolding {
            symbol: input.symbol,
            name: input.name,
            amount: resolved.quantity,
            purchase_price: resolved.purchase_price,
            current_price: resolved.current_price,
            total_value: resolved.total_value,
        },
    )
    .await?)
}

pub async fn update_crypto(
    pool: &PgPool,
    id: Uuid,
    input: UpdateCryptoHolding,
) -> Result<CryptoHolding, AppError> {
    db::crypto_queries::update(pool, id, input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Crypto holding {} not found", id)))
}

pub async fn delete_crypto(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    match db::crypto_queries::delete(pool, id).await? {
        0 => Err(AppError::NotFound(format!("Crypto holding {} not found", id))),
        _ => Ok(()),
    }
}
