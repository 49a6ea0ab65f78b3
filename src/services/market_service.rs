use tracing::{error, warn};

use crate::errors::AppError;
use crate::external::quote_provider::{AssetMatch, QuoteProvider};

/// Minimum query length before the provider is consulted at all.
const MIN_QUERY_LEN: usize = 2;

pub async fn search(
    provider: &dyn QuoteProvider,
    query: &str,
) -> Result<Vec<AssetMatch>, AppError> {
    if query.len() < MIN_QUERY_LEN {
        return Ok(Vec::new());
    }
    provider.search(query).await.map_err(|e| {
        error!("asset search failed for {:?}: {}", query, e);
        AppError::External(e.to_string())
    })
}

/// `None` means no price is available right now. Provider failures are
/// absorbed and logged here; they never become request failures.
pub async fn quote(provider: &dyn QuoteProvider, symbol: &str) -> Option<f64> {
    match provider.quote(symbol).await {
        Ok(price) => Some(price),
        Err(e) => {
            warn!("no quote for {}: {}", symbol, e);
            None
        }
    }
}

/// Search-then-quote: resolve a free-text name to the provider's best match
/// and fetch that symbol's price. No match means no price.
pub async fn quote_by_name(provider: &dyn QuoteProvider, name: &str) -> Option<f64> {
    let matches = match provider.search(name).await {
        Ok(matches) => matches,
        Err(e) => {
            warn!("symbol search failed for {:?}: {}", name, e);
            return None;
        }
    };
    let best = matches.into_iter().next()?;
    quote(provider, &best.symbol).await
}
