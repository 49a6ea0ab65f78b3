use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// A cash-equivalent bank position. The balance is only ever moved by
// deposit/withdrawal transactions or an explicit edit.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: uuid::Uuid,
    pub name: String,
    pub bank: String,
    pub balance: f64,
    pub currency: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccount {
    pub name: String,
    pub bank: String,
    pub balance: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccount {
    pub name: Option<String>,
    pub bank: Option<String>,
    pub balance: Option<f64>,
    pub currency: Option<String>,
}

pub(crate) fn default_currency() -> String {
    "USD".to_string()
}
