mod account;
mod cash;
mod crypto;
mod investment;
mod portfolio;
mod snapshot;
mod transaction;

pub use account::{Account, CreateAccount, UpdateAccount};
pub use cash::{CashHolding, CreateCashHolding, UpdateCashHolding};
pub use crypto::{CreateCryptoHolding, CryptoHolding, NewCryptoHolding, UpdateCryptoHolding};
pub use investment::{CreateInvestment, Investment, NewInvestment, UpdateInvestment};
pub use portfolio::{
    PortfolioBreakdown, PortfolioOverview, PortfolioTotals, UpdatedCounts, UpdatePricesReport,
};
pub use snapshot::PortfolioSnapshot;
pub use transaction::{
    AssetCategory, AssetInfo, CreateTransaction, Transaction, TransactionWithAsset, TxType,
};
