use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A symbol match returned by a provider's search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetMatch {
    pub symbol: String,
    pub name: String,
    pub exchange: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("no price available")]
    Unavailable,
}

/// External price oracle. Every failure mode collapses to a `QuoteError`;
/// callers on the read path treat all of them as "no price available" and
/// keep whatever value they already had.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Current unit price for a provider-native identifier.
    async fn quote(&self, symbol: &str) -> Result<f64, QuoteError>;

    /// Resolve a free-text query to candidate identifiers.
    async fn search(&self, query: &str) -> Result<Vec<AssetMatch>, QuoteError>;
}

pub(crate) fn quote_timeout() -> std::time::Duration {
    let secs = std::env::var("QUOTE_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);
    std::time::Duration::from_secs(secs)
}
