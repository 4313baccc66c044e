//! Pricing module - whitelist tiers and tier-discounted prices.

mod pricing_calculator;
mod pricing_model;

pub use pricing_calculator::{discounted_price, PricingError};
pub use pricing_model::WhitelistTier;
