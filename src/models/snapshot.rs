use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Immutable point-in-time record of portfolio totals. Rows are only ever
// appended (and pruned past the retention window), never updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub id: uuid::Uuid,
    pub total_value: f64,
    pub accounts_value: f64,
    pub investments_value: f64,
    pub crypto_value: f64,
    pub cash_value: f64,
    #[serde(rename = "date")]
    pub recorded_at: chrono::DateTime<chrono::Utc>,
}
