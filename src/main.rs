use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use networth_backend::app;
use networth_backend::external::coingecko::CoinGeckoProvider;
use networth_backend::external::yahoo::YahooFinanceProvider;
use networth_backend::logging::{self, LoggingConfig};
use networth_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    logging::init(LoggingConfig::from_env());

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
        .context("failed to connect to database")?;

    sqlx::migrate!().run(&pool).await?;

    let stocks = Arc::new(YahooFinanceProvider::from_env().context("failed to create stock quote provider")?);
    let crypto = Arc::new(CoinGeckoProvider::from_env().context("failed to create crypto quote provider")?);

    let state = AppState {
        pool,
        stocks,
        crypto,
    };
    let app = app::create_app(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("networth backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
