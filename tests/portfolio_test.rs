use chrono::Utc;
use uuid::Uuid;

use networth_backend::models::{Account, CashHolding, CryptoHolding, Investment};
use networth_backend::services::portfolio_service::compute_totals;

const TOL: f64 = 1e-9;

fn account(balance: f64) -> Account {
    Account {
        id: Uuid::new_v4(),
        name: "Checking".to_string(),
        bank: "Test Bank".to_string(),
        balance,
        currency: "EUR".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn investment(shares: f64, purchase_price: f64, total_value: Option<f64>) -> Investment {
    Investment {
        id: Uuid::new_v4(),
        symbol: "XYZ".to_string(),
        name: "Xyz Corp".to_string(),
        shares,
        purchase_price,
        current_price: total_value.map(|v| v / shares),
        total_value,
        dividends: 0.0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn crypto(amount: f64, purchase_price: f64, total_value: Option<f64>) -> CryptoHolding {
    CryptoHolding {
        id: Uuid::new_v4(),
        symbol: "bitcoin".to_string(),
        name: "Bitcoin".to_string(),
        amount,
        purchase_price,
        current_price: total_value.map(|v| v / amount),
        total_value,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn cash(amount: f64) -> CashHolding {
    CashHolding {
        id: Uuid::new_v4(),
        name: "Envelope".to_string(),
        amount,
        currency: "EUR".to_string(),
        location: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn accounts_and_cash_sum_into_the_breakdown() {
    let totals = compute_totals(&[account(1000.0)], &[], &[], &[cash(200.0)]);

    assert_eq!(totals.total, 1200.0);
    assert_eq!(totals.accounts, 1000.0);
    assert_eq!(totals.investments, 0.0);
    assert_eq!(totals.crypto, 0.0);
    assert_eq!(totals.cash, 200.0);
}

#[test]
fn unquoted_investment_contributes_cost_basis() {
    let totals = compute_totals(&[], &[investment(10.0, 100.0, None)], &[], &[]);
    assert_eq!(totals.investments, 1000.0);
    assert_eq!(totals.total, 1000.0);
}

#[test]
fn quoted_investment_contributes_its_mark() {
    let totals = compute_totals(&[], &[investment(10.0, 100.0, Some(1550.0))], &[], &[]);
    assert_eq!(totals.investments, 1550.0);
}

#[test]
fn crypto_falls_back_to_cost_basis_like_investments() {
    let totals = compute_totals(&[], &[], &[crypto(0.5, 27000.0, None)], &[]);
    assert!((totals.crypto - 13500.0).abs() < TOL);
}

#[test]
fn total_is_the_sum_of_the_four_subtotals() {
    let totals = compute_totals(
        &[account(4500.0), account(13500.0)],
        &[investment(10.0, 135.0, Some(1800.0))],
        &[crypto(0.5, 27000.0, Some(14200.0))],
        &[cash(450.0)],
    );
    assert!(
        (totals.total - (totals.accounts + totals.investments + totals.crypto + totals.cash)).abs()
            < TOL
    );
    assert!((totals.total - (18000.0 + 1800.0 + 14200.0 + 450.0)).abs() < TOL);
}

#[test]
fn position_order_within_a_category_does_not_matter() {
    let investments = vec![
        investment(10.0, 100.0, None),
        investment(3.0, 42.0, Some(150.0)),
        investment(0.5, 900.0, None),
    ];
    let mut reversed = investments.clone();
    reversed.reverse();

    let forward = compute_totals(&[], &investments, &[], &[]);
    let backward = compute_totals(&[], &reversed, &[], &[]);

    assert!((forward.investments - backward.investments).abs() < TOL);
    assert!((forward.total - backward.total).abs() < TOL);
}

#[test]
fn empty_portfolio_totals_to_zero() {
    let totals = compute_totals(&[], &[], &[], &[]);
    assert_eq!(totals.total, 0.0);
}

#[test]
fn market_value_prefers_the_stored_mark() {
    let with_mark = investment(10.0, 100.0, Some(1234.5));
    assert_eq!(with_mark.market_value(), 1234.5);

    let without_mark = investment(10.0, 100.0, None);
    assert_eq!(without_mark.market_value(), 1000.0);
}
