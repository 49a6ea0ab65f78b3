use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{
    AssetCategory, AssetInfo, CreateTransaction, Transaction, TransactionWithAsset, TxType,
};

/// Merge a purchase into an existing lot: quantities add, the cost basis
/// becomes the quantity-weighted mean of old and new. `None` when the
/// combined quantity is zero and there is nothing to average over.
pub fn merge_buy(held: f64, avg_price: f64, quantity: f64, price: f64) -> Option<(f64, f64)> {
    let total_quantity = held + quantity;
    if total_quantity == 0.0 {
        return None;
    }
    let total_cost = held * avg_price + quantity * price;
    Some((total_quantity, total_cost / total_quantity))
}

/// Signed balance effect of a cash-style transaction: deposits add,
/// withdrawals subtract.
pub fn signed_amount(tx_type: TxType, amount: f64) -> f64 {
    if tx_type == TxType::Withdrawal {
        -amount
    } else {
        amount
    }
}

/// Selling more than is held is rejected outright; positions never go
/// negative. `None` for held means the asset reference does not resolve,
/// which is allowed through (the position update is skipped later).
pub fn ensure_sell_within_holdings(quantity: f64, held: Option<f64>) -> Result<(), AppError> {
    match held {
        Some(held) if quantity > held => Err(AppError::Validation(format!(
            "Cannot sell {} units, only {} held",
            quantity, held
        ))),
        _ => Ok(()),
    }
}

pub async fn create_transaction(
    pool: &PgPool,
    input: CreateTransaction,
) -> Result<Transaction, AppError> {
    validate(&input)?;
    check_sell_quantity(pool, &input).await?;

    // The ledger row is the source of truth and goes in first. The position
    // update below is a derived view; if it fails the row stays, and the
    // position can be rebuilt by replaying the log.
    let transaction = db::transaction_queries::create(pool, &input).await?;
    apply_to_position(pool, &transaction).await?;
    Ok(transaction)
}

pub async fn list_transactions(
    pool: &PgPool,
    asset_type: Option<AssetCategory>,
    asset_id: Option<Uuid>,
) -> Result<Vec<TransactionWithAsset>, AppError> {
    let transactions = db::transaction_queries::fetch_filtered(pool, asset_type, asset_id).await?;

    let mut enriched = Vec::with_capacity(transactions.len());
    for transaction in transactions {
        let asset_info =
            lookup_asset_info(pool, transaction.asset_type, transaction.asset_id).await?;
        enriched.push(TransactionWithAsset {
            transaction,
            asset_info,
        });
    }
    Ok(enriched)
}

pub async fn list_for_asset(
    pool: &PgPool,
    asset_type: AssetCategory,
    asset_id: Uuid,
) -> Result<Vec<Transaction>, AppError> {
    Ok(db::transaction_queries::fetch_by_asset(pool, asset_type, asset_id).await?)
}

fn validate(input: &CreateTransaction) -> Result<(), AppError> {
    if !input.amount.is_finite() {
        return Err(AppError::Validation(
            "Amount must be a finite number".to_string(),
        ));
    }
    if let Some(price) = input.price {
        if !price.is_finite() || price < 0.0 {
            return Err(AppError::Validation(
                "Price must be a non-negative number".to_string(),
            ));
        }
    }
    if let Some(quantity) = input.quantity {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(AppError::Validation(
                "Quantity must be a positive number".to_string(),
            ));
        }
    }
    Ok(())
}

async fn check_sell_quantity(pool: &PgPool, input: &CreateTransaction) -> Result<(), AppError> {
    if input.tx_type != TxType::Sell {
        return Ok(());
    }
    let Some(quantity) = input.quantity else {
        // A sell without a quantity is recorded but never touches the
        // position, so there is nothing to bound it against.
        return Ok(());
    };
    let held = match input.asset_type {
        AssetCategory::Investment => db::investment_queries::fetch_one(pool, input.asset_id)
            .await?
            .map(|i| i.shares),
        AssetCategory::Crypto => db::crypto_queries::fetch_one(pool, input.asset_id)
            .await?
            .map(|c| c.amount),
        _ => None,
    };
    ensure_sell_within_holdings(quantity, held)
}

// Per-category legal transaction types. Anything outside this table is
// persisted to the log but has no effect on the position.
async fn apply_to_position(pool: &PgPool, tx: &Transaction) -> Result<(), AppError> {
    match (tx.asset_type, tx.tx_type) {
        (AssetCategory::Account, TxType::Deposit | TxType::Withdrawal) => {
            let delta = signed_amount(tx.tx_type, tx.amount);
            if db::account_queries::adjust_balance(pool, tx.asset_id, delta)
                .await?
                .is_none()
            {
                warn_unknown_asset(tx);
            }
        }
        (AssetCategory::Cash, TxType::Deposit | TxType::Withdrawal) => {
            let delta = signed_amount(tx.tx_type, tx.amount);
            if db::cash_queries::adjust_amount(pool, tx.asset_id, delta)
                .await?
                .is_none()
            {
                warn_unknown_asset(tx);
            }
        }
        (AssetCategory::Investment, TxType::Buy) => apply_investment_buy(pool, tx).await?,
        (AssetCategory::Investment, TxType::Sell) => {
            let Some(quantity) = tx.quantity else {
                warn!(
                    "sell transaction {} has no quantity, position left unchanged",
                    tx.id
                );
                return Ok(());
            };
            if db::investment_queries::apply_sell(pool, tx.asset_id, quantity).await? == 0 {
                warn_unknown_asset(tx);
            }
        }
        (AssetCategory::Investment, TxType::Dividend) => {
            if db::investment_queries::add_dividends(pool, tx.asset_id, tx.amount).await? == 0 {
                warn_unknown_asset(tx);
            }
        }
        (AssetCategory::Crypto, TxType::Buy) => apply_crypto_buy(pool, tx).await?,
        (AssetCategory::Crypto, TxType::Sell) => {
            let Some(quantity) = tx.quantity else {
                warn!(
                    "sell transaction {} has no quantity, position left unchanged",
                    tx.id
                );
                return Ok(());
            };
            if db::crypto_queries::apply_sell(pool, tx.asset_id, quantity).await? == 0 {
                warn_unknown_asset(tx);
            }
        }
        _ => {
            warn!(
                "transaction type {} has no effect on {} positions, recorded only",
                tx.tx_type, tx.asset_type
            );
        }
    }
    Ok(())
}

async fn apply_investment_buy(pool: &PgPool, tx: &Transaction) -> Result<(), AppError> {
    let (Some(price), Some(quantity)) = (tx.price, tx.quantity) else {
        warn!(
            "buy transaction {} is missing price or quantity, position left unchanged",
            tx.id
        );
        return Ok(());
    };
    let Some(investment) = db::investment_queries::fetch_one(pool, tx.asset_id).await? else {
        warn_unknown_asset(tx);
        return Ok(());
    };
    match merge_buy(investment.shares, investment.purchase_price, quantity, price) {
        Some((shares, purchase_price)) => {
            db::investment_queries::apply_buy(pool, tx.asset_id, shares, purchase_price).await?;
        }
        None => warn!(
            "buy transaction {} nets to zero quantity, position left unchanged",
            tx.id
        ),
    }
    Ok(())
}

async fn apply_crypto_buy(pool: &PgPool, tx: &Transaction) -> Result<(), AppError> {
    let (Some(price), Some(quantity)) = (tx.price, tx.quantity) else {
        warn!(
            "buy transaction {} is missing price or quantity, position left unchanged",
            tx.id
        );
        return Ok(());
    };
    let Some(holding) = db::crypto_queries::fetch_one(pool, tx.asset_id).await? else {
        warn_unknown_asset(tx);
        return Ok(());
    };
    match merge_buy(holding.amount, holding.purchase_price, quantity, price) {
        Some((amount, purchase_price)) => {
            db::crypto_queries::apply_buy(pool, tx.asset_id, amount, purchase_price).await?;
        }
        None => warn!(
            "buy transaction {} nets to zero quantity, position left unchanged",
            tx.id
        ),
    }
    Ok(())
}

async fn lookup_asset_info(
    pool: &PgPool,
    asset_type: AssetCategory,
    asset_id: Uuid,
) -> Result<Option<AssetInfo>, AppError> {
    let info = match asset_type {
        AssetCategory::Account => {
            db::account_queries::fetch_one(pool, asset_id)
                .await?
                .map(|a| AssetInfo {
                    name: a.name,
                    bank: Some(a.bank),
                    symbol: None,
                })
        }
        AssetCategory::Investment => {
            db::investment_queries::fetch_one(pool, asset_id)
                .await?
                .map(|i| AssetInfo {
                    name: i.name,
                    bank: None,
                    symbol: Some(i.symbol),
                })
        }
        AssetCategory::Crypto => {
            db::crypto_queries::fetch_one(pool, asset_id)
                .await?
                .map(|c| AssetInfo {
                    name: c.name,
                    bank: None,
                    symbol: Some(c.symbol),
                })
        }
        AssetCategory::Cash => {
            db::cash_queries::fetch_one(pool, asset_id)
                .await?
                .map(|c| AssetInfo {
                    name: c.name,
                    bank: None,
                    symbol: None,
                })
        }
    };
    Ok(info)
}

fn warn_unknown_asset(tx: &Transaction) {
    warn!(
        "{} {} references unknown asset {}, position update skipped",
        tx.asset_type, tx.tx_type, tx.asset_id
    );
}
