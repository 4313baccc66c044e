/// Decimal precision for display percentages
pub const PERCENT_DECIMAL_PLACES: u32 = 2;

/// Basis points in 100%
pub const BASIS_POINT_SCALE: u32 = 10_000;

/// Length of one stepped-vesting release interval, in seconds (30 days)
pub const STEP_INTERVAL_SECONDS: i64 = 30 * 24 * 60 * 60;
