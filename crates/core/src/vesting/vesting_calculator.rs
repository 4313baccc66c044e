//! Release progress calculation for vesting schedules.
//!
//! "Now" is always a parameter. The calculator never reads the system
//! clock, so the same schedule and instant always produce the same result.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::{PERCENT_DECIMAL_PLACES, STEP_INTERVAL_SECONDS};

use super::{VestingError, VestingKind, VestingScheduleRecord, VestingStatus};

/// Derived release state of a schedule at a given instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VestingProgress {
    /// Percent of the schedule elapsed, in `[0, 100]`.
    pub progress: Decimal,
    /// Vested but not yet released tokens.
    pub releasable_amount: Decimal,
    /// Next discrete release instant, unix seconds. `None` when the
    /// schedule accrues continuously, has no predictable dates, is
    /// complete, or is revoked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_release_at: Option<i64>,
    pub status: VestingStatus,
}

/// Computes release progress for `schedule` as of `now` (unix seconds).
///
/// A revoked schedule stops accruing at its recorded revocation instant;
/// its progress and releasable amount stay frozen there no matter how far
/// `now` advances.
pub fn vesting_progress(
    schedule: &VestingScheduleRecord,
    now: i64,
) -> Result<VestingProgress, VestingError> {
    validate(schedule)?;

    let effective_now = match (schedule.is_revoked, schedule.revoked_at) {
        (true, Some(revoked_at)) => now.min(revoked_at),
        _ => now,
    };

    let (progress, releasable_amount) = progress_at(schedule, effective_now);

    let next_release_at = if schedule.is_revoked {
        None
    } else {
        next_release_at(schedule, effective_now, progress)
    };

    let status = if schedule.is_revoked {
        VestingStatus::Revoked
    } else if progress >= dec!(100) {
        VestingStatus::Completed
    } else {
        VestingStatus::Active
    };

    Ok(VestingProgress {
        progress,
        releasable_amount,
        next_release_at,
        status,
    })
}

fn validate(schedule: &VestingScheduleRecord) -> Result<(), VestingError> {
    if schedule.start_time > schedule.cliff_end_time || schedule.cliff_end_time > schedule.end_time
    {
        return Err(VestingError::InvalidTimeRange {
            schedule_id: schedule.schedule_id.clone(),
            start_time: schedule.start_time,
            cliff_end_time: schedule.cliff_end_time,
            end_time: schedule.end_time,
        });
    }

    for (field, amount) in [
        ("total_amount", schedule.total_amount),
        ("released_amount", schedule.released_amount),
    ] {
        if amount < Decimal::ZERO {
            return Err(VestingError::NegativeAmount {
                schedule_id: schedule.schedule_id.clone(),
                field,
                amount,
            });
        }
    }

    if schedule.released_amount > schedule.total_amount {
        return Err(VestingError::ReleasedExceedsTotal {
            schedule_id: schedule.schedule_id.clone(),
            released_amount: schedule.released_amount,
            total_amount: schedule.total_amount,
        });
    }

    Ok(())
}

/// Piecewise progress and releasable amount at instant `t`.
fn progress_at(schedule: &VestingScheduleRecord, t: i64) -> (Decimal, Decimal) {
    if t < schedule.cliff_end_time {
        return (Decimal::ZERO, Decimal::ZERO);
    }
    if t >= schedule.end_time {
        // Also covers the degenerate start == end schedule without
        // dividing by zero.
        return (dec!(100), schedule.remaining_amount());
    }

    let elapsed = Decimal::from(t) - Decimal::from(schedule.start_time);
    let duration = Decimal::from(schedule.end_time) - Decimal::from(schedule.start_time);
    let progress = (elapsed / duration * dec!(100)).clamp(Decimal::ZERO, dec!(100));

    let vested = schedule.total_amount * progress / dec!(100);
    let releasable = (vested - schedule.released_amount).max(Decimal::ZERO);

    (progress.round_dp(PERCENT_DECIMAL_PLACES), releasable)
}

/// Next discrete release instant at `t`, by vesting kind.
fn next_release_at(schedule: &VestingScheduleRecord, t: i64, progress: Decimal) -> Option<i64> {
    if progress >= dec!(100) {
        return None;
    }
    match schedule.vesting_kind {
        VestingKind::Linear | VestingKind::Milestone => None,
        VestingKind::Cliff => {
            if t < schedule.cliff_end_time {
                Some(schedule.cliff_end_time)
            } else {
                None
            }
        }
        VestingKind::Stepped => {
            let elapsed = t.saturating_sub(schedule.start_time).max(0);
            let steps_done = elapsed / STEP_INTERVAL_SECONDS;
            let next_boundary = schedule
                .start_time
                .saturating_add((steps_done + 1).saturating_mul(STEP_INTERVAL_SECONDS));
            Some(next_boundary.min(schedule.end_time))
        }
    }
}
