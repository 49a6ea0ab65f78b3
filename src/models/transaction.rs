use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "asset_category", rename_all = "lowercase")]
pub enum AssetCategory {
    Account,
    Investment,
    Crypto,
    Cash,
}

impl AssetCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Account => "account",
            AssetCategory::Investment => "investment",
            AssetCategory::Crypto => "crypto",
            AssetCategory::Cash => "cash",
        }
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Which types are legal for which category is enforced by the ledger, not
// the type system: an illegal pair is persisted but has no position effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "transaction_type", rename_all = "lowercase")]
pub enum TxType {
    Deposit,
    Withdrawal,
    Buy,
    Sell,
    Dividend,
}

impl TxType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxType::Deposit => "deposit",
            TxType::Withdrawal => "withdrawal",
            TxType::Buy => "buy",
            TxType::Sell => "sell",
            TxType::Dividend => "dividend",
        }
    }
}

impl std::fmt::Display for TxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Append-only ledger entry. Never mutated or deleted, even when the owning
// position is; readers must tolerate asset ids that no longer resolve.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: uuid::Uuid,
    #[serde(rename = "type")]
    pub tx_type: TxType,
    pub asset_type: AssetCategory,
    pub asset_id: uuid::Uuid,
    pub amount: f64,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
    pub description: Option<String>,
    #[serde(rename = "date")]
    pub occurred_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransaction {
    #[serde(rename = "type")]
    pub tx_type: TxType,
    pub asset_type: AssetCategory,
    pub asset_id: uuid::Uuid,
    pub amount: f64,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
    pub description: Option<String>,
    pub date: Option<chrono::DateTime<chrono::Utc>>,
}

/// Display info for the owning asset, `None` when the reference dangles.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionWithAsset {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub asset_info: Option<AssetInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_transaction_uses_the_dashboard_field_names() {
        let input: CreateTransaction = serde_json::from_str(
            r#"{
                "type": "buy",
                "assetType": "investment",
                "assetId": "7f0b6f9e-4a15-4e0b-9c48-2a9a8f4a2f10",
                "amount": 500.0,
                "price": 100.0,
                "quantity": 5.0
            }"#,
        )
        .unwrap();
        assert_eq!(input.tx_type, TxType::Buy);
        assert_eq!(input.asset_type, AssetCategory::Investment);
        assert_eq!(input.quantity, Some(5.0));
        assert!(input.date.is_none());
    }

    #[test]
    fn transaction_serializes_type_and_date() {
        let tx = Transaction {
            id: uuid::Uuid::new_v4(),
            tx_type: TxType::Withdrawal,
            asset_type: AssetCategory::Account,
            asset_id: uuid::Uuid::new_v4(),
            amount: 300.0,
            price: None,
            quantity: None,
            description: None,
            occurred_at: chrono::Utc::now(),
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "withdrawal");
        assert_eq!(json["assetType"], "account");
        assert!(json.get("date").is_some());
        assert!(json.get("occurred_at").is_none());
    }
}
