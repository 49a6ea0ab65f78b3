use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// One row per equity symbol held. `purchase_price` is the weighted-average
// acquisition cost; `current_price`/`total_value` are the last known market
// quote and mark, updated together or not at all.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: uuid::Uuid,
    pub symbol: String,
    pub name: String,
    pub shares: f64,
    pub purchase_price: f64,
    pub current_price: Option<f64>,
    pub total_value: Option<f64>,
    pub dividends: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Investment {
    /// Mark-to-market value, falling back to cost basis when no quote has
    /// ever been recorded.
    pub fn market_value(&self) -> f64 {
        self.total_value
            .unwrap_or(self.shares * self.purchase_price)
    }
}

/// Request body for creating an investment. Either `shares` +
/// `purchasePrice` or a `totalAmount` to be converted at the live quote.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvestment {
    pub symbol: String,
    pub name: String,
    pub shares: Option<f64>,
    pub purchase_price: Option<f64>,
    pub total_amount: Option<f64>,
}

/// Fully-resolved insert parameters, produced by the service once quote
/// lookup and total-amount conversion have run.
#[derive(Debug)]
pub struct NewInvestment {
    pub symbol: String,
    pub name: String,
    pub shares: f64,
    pub purchase_price: f64,
    pub current_price: Option<f64>,
    pub total_value: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvestment {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub shares: Option<f64>,
    pub purchase_price: Option<f64>,
    pub dividends: Option<f64>,
}
