use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// One row per crypto asset held. `symbol` is the quote provider's coin id
// (e.g. "bitcoin"), not an exchange ticker.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CryptoHolding {
    pub id: uuid::Uuid,
    pub symbol: String,
    pub name: String,
    pub amount: f64,
    pub purchase_price: f64,
    pub current_price: Option<f64>,
    pub total_value: Option<f64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl CryptoHolding {
    pub fn market_value(&self) -> f64 {
        self.total_value
            .unwrap_or(self.amount * self.purchase_price)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCryptoHolding {
    pub symbol: String,
    pub name: String,
    pub amount: Option<f64>,
    pub purchase_price: Option<f64>,
    pub total_amount: Option<f64>,
}

#[derive(Debug)]
pub struct NewCryptoHolding {
    pub symbol: String,
    pub name: String,
    pub amount: f64,
    pub purchase_price: f64,
    pub current_price: Option<f64>,
    pub total_value: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCryptoHolding {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub purchase_price: Option<f64>,
}
