//! Vesting module - schedule models and release progress calculation.

mod vesting_calculator;
mod vesting_errors;
mod vesting_model;

pub use vesting_calculator::{vesting_progress, VestingProgress};
pub use vesting_errors::VestingError;
pub use vesting_model::{VestingKind, VestingScheduleRecord, VestingStatus};

#[cfg(test)]
mod vesting_calculator_tests;
