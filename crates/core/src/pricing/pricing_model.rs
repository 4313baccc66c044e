//! Whitelist tier model.

use serde::{Deserialize, Serialize};

/// Discount/eligibility class assigned to a participant address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WhitelistTier {
    #[default]
    None,
    Whitelisted,
    Vip,
}

impl WhitelistTier {
    /// Fixed discount table, in basis points.
    pub fn discount_bps(&self) -> u32 {
        match self {
            WhitelistTier::None => 0,
            WhitelistTier::Whitelisted => 1_000,
            WhitelistTier::Vip => 2_000,
        }
    }
}
