pub mod asset_service;
pub mod ledger_service;
pub mod market_service;
pub mod portfolio_service;
pub mod valuation_service;
