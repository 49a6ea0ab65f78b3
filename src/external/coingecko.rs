use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

use crate::external::quote_provider::{quote_timeout, AssetMatch, QuoteError, QuoteProvider};

const SIMPLE_PRICE_URL: &str = "https://api.coingecko.com/api/v3/simple/price";
const SEARCH_URL: &str = "https://api.coingecko.com/api/v3/search";

pub struct CoinGeckoProvider {
    client: reqwest::Client,
    vs_currency: String,
}

impl CoinGeckoProvider {
    pub fn from_env() -> Result<Self, QuoteError> {
        let client = reqwest::Client::builder()
            .timeout(quote_timeout())
            .build()
            .map_err(|e| QuoteError::Network(e.to_string()))?;

        Ok(Self {
            client,
            vs_currency: std::env::var("QUOTE_CURRENCY").unwrap_or_else(|_| "eur".to_string()),
        })
    }
}

// simple/price returns { "<coin id>": { "<currency>": 12345.0 } }
type SimplePriceResponse = HashMap<String, HashMap<String, f64>>;

fn price_from_response(
    body: &SimplePriceResponse,
    coin_id: &str,
    vs_currency: &str,
) -> Result<f64, QuoteError> {
    body.get(coin_id)
        .and_then(|prices| prices.get(vs_currency))
        .copied()
        .ok_or(QuoteError::Unavailable)
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    coins: Option<Vec<CoinMatch>>,
}

#[derive(Debug, Deserialize)]
struct CoinMatch {
    id: String,
    name: String,
}

#[async_trait]
impl QuoteProvider for CoinGeckoProvider {
    async fn quote(&self, symbol: &str) -> Result<f64, QuoteError> {
        let resp = self
            .client
            .get(SIMPLE_PRICE_URL)
            .query(&[("ids", symbol), ("vs_currencies", self.vs_currency.as_str())])
            .send()
            .await
            .map_err(|e| QuoteError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(QuoteError::BadResponse(format!(
                "price request returned {}",
                resp.status()
            )));
        }

        let body = resp
            .json::<SimplePriceResponse>()
            .await
            .map_err(|e| QuoteError::Parse(e.to_string()))?;

        price_from_response(&body, symbol, &self.vs_currency)
    }

    async fn search(&self, query: &str) -> Result<Vec<AssetMatch>, QuoteError> {
        let resp = self
            .client
            .get(SEARCH_URL)
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| QuoteError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(QuoteError::BadResponse(format!(
                "search request returned {}",
                resp.status()
            )));
        }

        let body = resp
            .json::<SearchResponse>()
            .await
            .map_err(|e| QuoteError::Parse(e.to_string()))?;

        // The coin id is what simple/price wants back, so it doubles as the
        // stored symbol.
        Ok(body
            .coins
            .unwrap_or_default()
            .into_iter()
            .take(10)
            .map(|coin| AssetMatch {
                symbol: coin.id,
                name: coin.name,
                exchange: "CoinGecko".to_string(),
                kind: "crypto".to_string(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_price_for_requested_currency() {
        let body: SimplePriceResponse =
            serde_json::from_str(r#"{"bitcoin":{"eur":59230.12,"usd":64001.5}}"#).unwrap();
        assert_eq!(price_from_response(&body, "bitcoin", "eur").unwrap(), 59230.12);
    }

    #[test]
    fn unknown_coin_is_unavailable() {
        let body: SimplePriceResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(matches!(
            price_from_response(&body, "bitcoin", "eur"),
            Err(QuoteError::Unavailable)
        ));
    }

    #[test]
    fn missing_currency_is_unavailable() {
        let body: SimplePriceResponse =
            serde_json::from_str(r#"{"bitcoin":{"usd":64001.5}}"#).unwrap();
        assert!(matches!(
            price_from_response(&body, "bitcoin", "eur"),
            Err(QuoteError::Unavailable)
        ));
    }
}
