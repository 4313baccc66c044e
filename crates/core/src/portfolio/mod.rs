//! Portfolio module - investment records and summary aggregation.

mod portfolio_aggregator;
mod portfolio_errors;
mod portfolio_model;

pub use portfolio_aggregator::aggregate;
pub use portfolio_errors::PortfolioError;
pub use portfolio_model::{InvestmentRecord, InvestmentStatus, PortfolioSummary, TokenAllocation};
