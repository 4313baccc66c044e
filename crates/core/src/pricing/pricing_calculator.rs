//! Tier-based discount pricing.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::constants::BASIS_POINT_SCALE;

use super::WhitelistTier;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("Base price must not be negative, got {0}")]
    NegativeBasePrice(Decimal),
}

/// Applies the tier's fixed discount to a base token price.
pub fn discounted_price(
    base_price: Decimal,
    tier: WhitelistTier,
) -> Result<Decimal, PricingError> {
    if base_price < Decimal::ZERO {
        return Err(PricingError::NegativeBasePrice(base_price));
    }
    let discount = Decimal::from(tier.discount_bps()) / Decimal::from(BASIS_POINT_SCALE);
    Ok(base_price * (Decimal::ONE - discount))
}
