use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{accounts, assets, cash, crypto, health, investments, portfolio, transactions};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/accounts", accounts::router())
        .nest("/api/cash", cash::router())
        .nest("/api/investments", investments::router())
        .nest("/api/crypto", crypto::router())
        .nest("/api/transactions", transactions::router())
        .nest("/api/portfolio", portfolio::router())
        .nest("/api/assets", assets::router())
        // The dashboard is served from a different origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
