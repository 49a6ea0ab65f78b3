use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::account::default_currency;

// Physical or otherwise uninvested cash, e.g. "Emergency Fund".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CashHolding {
    pub id: uuid::Uuid,
    pub name: String,
    pub amount: f64,
    pub currency: String,
    pub location: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCashHolding {
    pub name: String,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCashHolding {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub location: Option<String>,
}
