use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use networth_backend::errors::AppError;
use networth_backend::external::quote_provider::{AssetMatch, QuoteError, QuoteProvider};
use networth_backend::services::market_service;

/// Provider that answers from fixed tables, counting search calls.
struct ScriptedProvider {
    matches: Vec<AssetMatch>,
    prices: HashMap<String, f64>,
    search_calls: AtomicUsize,
}

impl ScriptedProvider {
    fn new(matches: Vec<AssetMatch>, prices: &[(&str, f64)]) -> Self {
        Self {
            matches,
            prices: prices
                .iter()
                .map(|&(symbol, price)| (symbol.to_string(), price))
                .collect(),
            search_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl QuoteProvider for ScriptedProvider {
    async fn quote(&self, symbol: &str) -> Result<f64, QuoteError> {
        self.prices
            .get(symbol)
            .copied()
            .ok_or(QuoteError::Unavailable)
    }

    async fn search(&self, _query: &str) -> Result<Vec<AssetMatch>, QuoteError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.matches.clone())
    }
}

/// Provider whose every call fails at the network layer.
struct DownProvider;

#[async_trait]
impl QuoteProvider for DownProvider {
    async fn quote(&self, _symbol: &str) -> Result<f64, QuoteError> {
        Err(QuoteError::Network("connection refused".to_string()))
    }

    async fn search(&self, _query: &str) -> Result<Vec<AssetMatch>, QuoteError> {
        Err(QuoteError::Network("connection refused".to_string()))
    }
}

fn asset_match(symbol: &str, name: &str) -> AssetMatch {
    AssetMatch {
        symbol: symbol.to_string(),
        name: name.to_string(),
        exchange: "NMS".to_string(),
        kind: "stock".to_string(),
    }
}

#[tokio::test]
async fn quote_by_name_resolves_the_best_match_then_quotes_it() {
    let provider = ScriptedProvider::new(
        vec![asset_match("AAPL", "Apple Inc."), asset_match("APLE", "Apple Hospitality")],
        &[("AAPL", 187.44), ("APLE", 15.02)],
    );

    let price = market_service::quote_by_name(&provider, "apple").await;
    assert_eq!(price, Some(187.44));
}

#[tokio::test]
async fn quote_by_name_without_a_match_is_none() {
    let provider = ScriptedProvider::new(vec![], &[("AAPL", 187.44)]);
    assert_eq!(market_service::quote_by_name(&provider, "no such company").await, None);
}

#[tokio::test]
async fn provider_failures_never_escape_the_quote_path() {
    assert_eq!(market_service::quote(&DownProvider, "AAPL").await, None);
    assert_eq!(market_service::quote_by_name(&DownProvider, "apple").await, None);
}

#[tokio::test]
async fn unknown_symbol_quotes_to_none() {
    let provider = ScriptedProvider::new(vec![], &[("AAPL", 187.44)]);
    assert_eq!(market_service::quote(&provider, "MSFT").await, None);
}

#[tokio::test]
async fn short_queries_return_empty_without_consulting_the_provider() {
    let provider = ScriptedProvider::new(vec![asset_match("AAPL", "Apple Inc.")], &[]);

    let matches = market_service::search(&provider, "a").await.unwrap();
    assert!(matches.is_empty());
    assert_eq!(provider.search_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn search_failures_surface_as_external_errors() {
    let err = market_service::search(&DownProvider, "apple").await.unwrap_err();
    assert!(matches!(err, AppError::External(_)));
}
