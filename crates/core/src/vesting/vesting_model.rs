//! Vesting schedule domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::time_utils::datetime_from_unix;

/// Shape of a schedule's release curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VestingKind {
    /// Continuous accrual between start and end.
    Linear,
    /// Nothing until the cliff, everything claimable from the cliff onward.
    Cliff,
    /// Releases on fixed 30-day boundaries counted from the start.
    Stepped,
    /// Releases tied to off-chain milestones; no predictable dates.
    Milestone,
}

/// Lifecycle status derived for a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VestingStatus {
    Active,
    Completed,
    Revoked,
}

/// A token allocation released over time, as reported by the data-fetch
/// layer.
///
/// Timestamps are on-chain unix seconds. Invariants checked by the
/// calculator: `start_time <= cliff_end_time <= end_time` and
/// `released_amount <= total_amount`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VestingScheduleRecord {
    pub schedule_id: String,
    pub token_symbol: String,
    pub total_amount: Decimal,
    pub released_amount: Decimal,
    pub start_time: i64,
    pub cliff_end_time: i64,
    pub end_time: i64,
    pub vesting_kind: VestingKind,
    /// Once revoked, accrual is frozen and release actions are disallowed.
    #[serde(default)]
    pub is_revoked: bool,
    /// Instant the revocation happened, when the feed records one. Accrual
    /// is frozen as of this instant.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked_at: Option<i64>,
}

impl VestingScheduleRecord {
    /// Remaining unreleased allocation.
    pub fn remaining_amount(&self) -> Decimal {
        self.total_amount - self.released_amount
    }

    pub fn start_time_utc(&self) -> DateTime<Utc> {
        datetime_from_unix(self.start_time)
    }

    pub fn end_time_utc(&self) -> DateTime<Utc> {
        datetime_from_unix(self.end_time)
    }
}
