use serde::Serialize;

use super::{Account, CashHolding, CryptoHolding, Investment};

/// Net worth plus the per-category subtotals it sums.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotals {
    pub total: f64,
    pub accounts: f64,
    pub investments: f64,
    pub crypto: f64,
    pub cash: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioBreakdown {
    pub accounts: f64,
    pub investments: f64,
    pub crypto: f64,
    pub cash: f64,
}

impl From<PortfolioTotals> for PortfolioBreakdown {
    fn from(t: PortfolioTotals) -> Self {
        Self {
            accounts: t.accounts,
            investments: t.investments,
            crypto: t.crypto,
            cash: t.cash,
        }
    }
}

/// Full dashboard payload: totals, breakdown and the raw rows they were
/// computed from.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    pub total: f64,
    pub breakdown: PortfolioBreakdown,
    pub accounts: Vec<Account>,
    pub investments: Vec<Investment>,
    pub crypto: Vec<CryptoHolding>,
    pub cash: Vec<CashHolding>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedCounts {
    pub investments: u64,
    pub crypto: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePricesReport {
    pub updated: UpdatedCounts,
    pub totals: PortfolioTotals,
}
