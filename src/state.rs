use std::sync::Arc;

use sqlx::PgPool;

use crate::external::quote_provider::QuoteProvider;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Quote source for equity-like symbols.
    pub stocks: Arc<dyn QuoteProvider>,
    /// Quote source for crypto identifiers.
    pub crypto: Arc<dyn QuoteProvider>,
}
