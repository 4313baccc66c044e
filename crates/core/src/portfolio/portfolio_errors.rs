use rust_decimal::Decimal;
use thiserror::Error;

/// Errors for portfolio aggregation over malformed inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// Value totals are only meaningful in a single denomination; records
    /// tagged with different currencies are never summed.
    #[error("Currency mismatch: record {crowdsale_id} is denominated in {found}, expected {expected}")]
    CurrencyMismatch {
        crowdsale_id: String,
        expected: String,
        found: String,
    },

    #[error("Negative {field} on record {crowdsale_id}: {amount}")]
    NegativeAmount {
        crowdsale_id: String,
        field: &'static str,
        amount: Decimal,
    },

    #[error("Reference token price must not be negative, got {0}")]
    NegativeReferencePrice(Decimal),
}
