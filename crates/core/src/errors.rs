//! Core error types for the crowdsale analytics engine.
//!
//! Each domain module defines its own error enum; this module wraps them in
//! a single root type so callers can propagate with `?` across module
//! boundaries. Empty input is never an error anywhere in the engine - it is
//! a defined zero-result case handled by the aggregation functions.

use thiserror::Error;

use crate::money::MoneyError;
use crate::portfolio::PortfolioError;
use crate::pricing::PricingError;
use crate::vesting::VestingError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the analytics engine.
///
/// Malformed input fails fast with one of these rather than silently
/// producing NaN-like garbage or negative percentages.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Amount conversion failed: {0}")]
    Money(#[from] MoneyError),

    #[error("Vesting schedule error: {0}")]
    Vesting(#[from] VestingError),

    #[error("Portfolio aggregation failed: {0}")]
    Portfolio(#[from] PortfolioError),

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
