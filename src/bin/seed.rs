use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use networth_backend::db;
use networth_backend::models::{
    CreateAccount, CreateCashHolding, NewCryptoHolding, NewInvestment,
};
use networth_backend::services::portfolio_service;

// Wipes the store and repopulates it with a small demo dataset plus a week
// of synthetic history, so the dashboard has something to show.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("failed to connect to database")?;
    sqlx::migrate!().run(&pool).await?;

    println!("Seeding database...");
    clear(&pool).await?;

    let accounts = [
        ("Main Checking", "Deutsche Bank", 4500.00),
        ("Savings Account", "Commerzbank", 13500.00),
        ("Business Account", "Sparkasse", 22500.00),
    ];
    for (name, bank, balance) in accounts {
        db::account_queries::create(
            &pool,
            CreateAccount {
                name: name.to_string(),
                bank: bank.to_string(),
                balance,
                currency: "EUR".to_string(),
            },
        )
        .await?;
    }

    let investments = [
        ("AAPL", "Apple Inc.", 10.0, 135.00, 45.00),
        ("MSFT", "Microsoft Corporation", 5.0, 270.00, 22.50),
        ("SPY", "SPDR S&P 500 ETF", 20.0, 360.00, 90.00),
    ];
    for (symbol, name, shares, purchase_price, dividends) in investments {
        let created = db::investment_queries::create(
            &pool,
            NewInvestment {
                symbol: symbol.to_string(),
                name: name.to_string(),
                shares,
                purchase_price,
                current_price: None,
                total_value: None,
            },
        )
        .await?;
        db::investment_queries::add_dividends(&pool, created.id, dividends).await?;
    }

    let crypto = [
        ("bitcoin", "Bitcoin", 0.5, 27000.00),
        ("ethereum", "Ethereum", 2.5, 1800.00),
    ];
    for (symbol, name, amount, purchase_price) in crypto {
        db::crypto_queries::create(
            &pool,
            NewCryptoHolding {
                symbol: symbol.to_string(),
                name: name.to_string(),
                amount,
                purchase_price,
                current_price: None,
                total_value: None,
            },
        )
        .await?;
    }

    let cash = [
        ("Emergency Fund", 1800.00, None),
        ("Travel Money", 450.00, Some("Desk drawer")),
    ];
    for (name, amount, location) in cash {
        db::cash_queries::create(
            &pool,
            CreateCashHolding {
                name: name.to_string(),
                amount,
                currency: "EUR".to_string(),
                location: location.map(str::to_string),
            },
        )
        .await?;
    }

    seed_history(&pool).await?;

    println!("Database seeded:");
    println!("  {} accounts", accounts.len());
    println!("  {} investments", investments.len());
    println!("  {} crypto holdings", crypto.len());
    println!("  {} cash holdings", cash.len());
    println!("  7 days of portfolio history");
    Ok(())
}

async fn clear(pool: &PgPool) -> anyhow::Result<()> {
    for table in [
        "portfolio_snapshots",
        "transactions",
        "cash_holdings",
        "crypto_holdings",
        "investments",
        "accounts",
    ] {
        sqlx::query(&format!("DELETE FROM {}", table))
            .execute(pool)
            .await?;
    }
    Ok(())
}

// A week of back-dated snapshots around the seeded totals, jittered a
// little so the chart is not a flat line.
async fn seed_history(pool: &PgPool) -> anyhow::Result<()> {
    let accounts = db::account_queries::fetch_all(pool).await?;
    let investments = db::investment_queries::fetch_all(pool).await?;
    let crypto = db::crypto_queries::fetch_all(pool).await?;
    let cash = db::cash_queries::fetch_all(pool).await?;
    let totals = portfolio_service::compute_totals(&accounts, &investments, &crypto, &cash);

    for days_ago in (0..7).rev() {
        let recorded_at = chrono::Utc::now() - chrono::Duration::days(days_ago);
        let scale = 1.0 + (rand::random::<f64>() - 0.5) * 0.04;
        sqlx::query(
            "INSERT INTO portfolio_snapshots
             (id, total_value, accounts_value, investments_value, crypto_value, cash_value, recorded_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(uuid::Uuid::new_v4())
        .bind(totals.total * scale)
        .bind(totals.accounts * scale)
        .bind(totals.investments * scale)
        .bind(totals.crypto * scale)
        .bind(totals.cash * scale)
        .bind(recorded_at)
        .execute(pool)
        .await?;
    }
    Ok(())
}
