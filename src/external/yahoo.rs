use async_trait::async_trait;
use serde::Deserialize;

use crate::external::quote_provider::{quote_timeout, AssetMatch, QuoteError, QuoteProvider};

const CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const SEARCH_URL: &str = "https://query1.finance.yahoo.com/v1/finance/search";
// Yahoo rejects requests without a browser-looking user agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub struct YahooFinanceProvider {
    client: reqwest::Client,
}

impl YahooFinanceProvider {
    pub fn from_env() -> Result<Self, QuoteError> {
        let client = reqwest::Client::builder()
            .timeout(quote_timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| QuoteError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
}

fn price_from_chart(body: ChartResponse) -> Result<f64, QuoteError> {
    body.chart
        .result
        .and_then(|results| results.into_iter().next())
        .and_then(|r| r.meta.regular_market_price)
        .ok_or(QuoteError::Unavailable)
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    quotes: Option<Vec<SearchQuote>>,
}

#[derive(Debug, Deserialize)]
struct SearchQuote {
    symbol: Option<String>,
    longname: Option<String>,
    shortname: Option<String>,
    exchange: Option<String>,
}

fn matches_from_search(body: SearchResponse) -> Vec<AssetMatch> {
    body.quotes
        .unwrap_or_default()
        .into_iter()
        .filter_map(|q| {
            let symbol = q.symbol?;
            let name = q.longname.or(q.shortname).unwrap_or_else(|| symbol.clone());
            Some(AssetMatch {
                symbol,
                name,
                exchange: q.exchange.unwrap_or_default(),
                kind: "stock".to_string(),
            })
        })
        .collect()
}

#[async_trait]
impl QuoteProvider for YahooFinanceProvider {
    async fn quote(&self, symbol: &str) -> Result<f64, QuoteError> {
        let resp = self
            .client
            .get(format!("{}/{}", CHART_URL, symbol))
            .query(&[("interval", "1d"), ("range", "1d")])
            .send()
            .await
            .map_err(|e| QuoteError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(QuoteError::BadResponse(format!(
                "chart request returned {}",
                resp.status()
            )));
        }

        let body = resp
            .json::<ChartResponse>()
            .await
            .map_err(|e| QuoteError::Parse(e.to_string()))?;

        price_from_chart(body)
    }

    async fn search(&self, query: &str) -> Result<Vec<AssetMatch>, QuoteError> {
        let resp = self
            .client
            .get(SEARCH_URL)
            .query(&[("q", query), ("quotesCount", "10"), ("newsCount", "0")])
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

        Ok(matches_from_search(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_regular_market_price() {
        let body: ChartResponse = serde_json::from_str(
            r#"{"chart":{"result":[{"meta":{"regularMarketPrice":187.44,"currency":"USD"}}]}}"#,
        )
        .unwrap();
        assert_eq!(price_from_chart(body).unwrap(), 187.44);
    }

    #[test]
    fn missing_price_field_is_unavailable() {
        let body: ChartResponse =
            serde_json::from_str(r#"{"chart":{"result":[{"meta":{"currency":"USD"}}]}}"#).unwrap();
        assert!(matches!(price_from_chart(body), Err(QuoteError::Unavailable)));
    }

    #[test]
    fn empty_result_is_unavailable() {
        let body: ChartResponse = serde_json::from_str(r#"{"chart":{"result":null}}"#).unwrap();
        assert!(matches!(price_from_chart(body), Err(QuoteError::Unavailable)));
    }

    #[test]
    fn search_prefers_long_name_and_drops_symbolless_rows() {
        let body: SearchResponse = serde_json::from_str(
            r#"{"quotes":[
                {"symbol":"AAPL","longname":"Apple Inc.","shortname":"Apple","exchange":"NMS"},
                {"symbol":"MSFT","shortname":"Microsoft","exchange":"NMS"},
                {"longname":"No Symbol Co"}
            ]}"#,
        )
        .unwrap();
        let matches = matches_from_search(body);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].name, "Apple Inc.");
        assert_eq!(matches[1].name, "Microsoft");
        assert_eq!(matches[1].kind, "stock");
    }
}
