//! Investment record and portfolio summary domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::time_utils::datetime_from_unix;

/// Lifecycle status of a crowdsale investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentStatus {
    #[default]
    Active,
    Completed,
    Refunded,
}

/// A single crowdsale purchase, as reported by the data-fetch layer.
///
/// `profit_loss` and `profit_loss_percentage` are computed upstream against
/// the same mark-to-market source as `current_value`; the engine only
/// aggregates them. Upstream invariant: `profit_loss_percentage ==
/// profit_loss / invested_amount * 100` when `invested_amount > 0`, else 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRecord {
    pub crowdsale_id: String,
    pub token_symbol: String,
    pub token_address: String,
    /// Amount contributed, denominated in `currency`.
    pub invested_amount: Decimal,
    /// Denomination shared by `invested_amount`, `current_value`, and
    /// `profit_loss`. Records with different tags cannot be aggregated
    /// together.
    pub currency: String,
    /// Tokens received for the contribution.
    pub token_amount: Decimal,
    /// Unix seconds.
    pub invested_at: i64,
    pub status: InvestmentStatus,
    /// Caller-supplied mark-to-market value, denominated in `currency`.
    pub current_value: Decimal,
    pub profit_loss: Decimal,
    pub profit_loss_percentage: Decimal,
}

impl InvestmentRecord {
    pub fn invested_at_utc(&self) -> DateTime<Utc> {
        datetime_from_unix(self.invested_at)
    }

    /// Whether the record carries an actual contribution. Records without
    /// one are excluded from ROI averages.
    pub fn has_position(&self) -> bool {
        self.invested_amount > Decimal::ZERO
    }
}

/// Value share of a single token across the portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenAllocation {
    pub token_symbol: String,
    pub token_amount: Decimal,
    pub value: Decimal,
    pub percentage: Decimal,
}

/// Derived portfolio statistics. Recomputed on every call, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Denomination shared by every value total below. Empty for an empty
    /// portfolio.
    pub currency: String,
    pub total_invested: Decimal,
    pub total_tokens: Decimal,
    pub current_value: Decimal,
    pub total_profit: Decimal,
    pub profit_percentage: Decimal,
    pub active_count: usize,
    pub completed_count: usize,
    pub refunded_count: usize,
    /// Arithmetic mean of `profit_loss_percentage` over records with an
    /// actual contribution; 0 when there are none.
    pub average_roi: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_performing: Option<InvestmentRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst_performing: Option<InvestmentRecord>,
    /// Per-token value distribution, sorted by value descending.
    pub token_allocations: Vec<TokenAllocation>,
    /// Unreleased vesting allocations valued at the reference token price.
    pub total_vesting_value: Decimal,
    /// Currently releasable vesting amounts valued at the reference token
    /// price.
    pub releasable_value: Decimal,
    pub vesting_active_count: usize,
    pub vesting_completed_count: usize,
    pub vesting_revoked_count: usize,
}
