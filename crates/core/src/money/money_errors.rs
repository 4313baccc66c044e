use thiserror::Error;

/// Errors produced by amount parsing and unit conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The input is not a finite, non-negative numeric string.
    #[error("Invalid number format: '{0}'")]
    InvalidNumberFormat(String),

    /// The value cannot be represented at the requested precision.
    #[error("Value '{value}' exceeds the precision of {decimals} fractional digits")]
    PrecisionOverflow { value: String, decimals: u32 },
}
