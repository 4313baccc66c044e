use rust_decimal::Decimal;
use thiserror::Error;

/// Errors for malformed vesting schedules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VestingError {
    /// Schedule boundaries must satisfy `start <= cliff <= end`.
    #[error(
        "Invalid time range for schedule {schedule_id}: start={start_time}, cliff={cliff_end_time}, end={end_time}"
    )]
    InvalidTimeRange {
        schedule_id: String,
        start_time: i64,
        cliff_end_time: i64,
        end_time: i64,
    },

    #[error("Released amount {released_amount} exceeds total amount {total_amount} for schedule {schedule_id}")]
    ReleasedExceedsTotal {
        schedule_id: String,
        released_amount: Decimal,
        total_amount: Decimal,
    },

    #[error("Negative {field} on schedule {schedule_id}: {amount}")]
    NegativeAmount {
        schedule_id: String,
        field: &'static str,
        amount: Decimal,
    },
}
