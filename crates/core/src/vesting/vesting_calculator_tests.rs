//! Tests for the vesting progress calculator.

#[cfg(test)]
mod tests {
    use crate::vesting::{
        vesting_progress, VestingError, VestingKind, VestingScheduleRecord, VestingStatus,
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    const DAY: i64 = 24 * 60 * 60;

    fn linear_schedule() -> VestingScheduleRecord {
        VestingScheduleRecord {
            schedule_id: "sched-1".to_string(),
            token_symbol: "CFT".to_string(),
            total_amount: dec!(100),
            released_amount: dec!(0),
            start_time: 1000,
            cliff_end_time: 2000,
            end_time: 5000,
            vesting_kind: VestingKind::Linear,
            is_revoked: false,
            revoked_at: None,
        }
    }

    #[test]
    fn test_progress_before_cliff_is_zero() {
        let progress = vesting_progress(&linear_schedule(), 1500).unwrap();
        assert_eq!(progress.progress, Decimal::ZERO);
        assert_eq!(progress.releasable_amount, Decimal::ZERO);
        assert_eq!(progress.status, VestingStatus::Active);
    }

    #[test]
    fn test_progress_linear_midpoint() {
        // (3500 - 1000) / (5000 - 1000) * 100 = 62.5
        let progress = vesting_progress(&linear_schedule(), 3500).unwrap();
        assert_eq!(progress.progress, dec!(62.5));
        assert_eq!(progress.releasable_amount, dec!(62.5));
        assert_eq!(progress.status, VestingStatus::Active);
    }

    #[test]
    fn test_progress_after_end_is_complete() {
        let progress = vesting_progress(&linear_schedule(), 10_000).unwrap();
        assert_eq!(progress.progress, dec!(100));
        assert_eq!(progress.releasable_amount, dec!(100));
        assert_eq!(progress.status, VestingStatus::Completed);
        assert_eq!(progress.next_release_at, None);
    }

    #[test]
    fn test_releasable_subtracts_already_released() {
        let mut schedule = linear_schedule();
        schedule.released_amount = dec!(40);
        let progress = vesting_progress(&schedule, 3500).unwrap();
        assert_eq!(progress.releasable_amount, dec!(22.5));

        // More released than vested so far: floored at zero, not negative.
        schedule.released_amount = dec!(80);
        let progress = vesting_progress(&schedule, 3500).unwrap();
        assert_eq!(progress.releasable_amount, Decimal::ZERO);
    }

    #[test]
    fn test_progress_clamped_before_start() {
        let mut schedule = linear_schedule();
        schedule.cliff_end_time = schedule.start_time;
        let progress = vesting_progress(&schedule, 0).unwrap();
        assert_eq!(progress.progress, Decimal::ZERO);
    }

    #[test]
    fn test_degenerate_schedule_does_not_divide_by_zero() {
        let mut schedule = linear_schedule();
        schedule.start_time = 5000;
        schedule.cliff_end_time = 5000;
        schedule.end_time = 5000;

        let before = vesting_progress(&schedule, 4999).unwrap();
        assert_eq!(before.progress, Decimal::ZERO);

        let after = vesting_progress(&schedule, 5000).unwrap();
        assert_eq!(after.progress, dec!(100));
        assert_eq!(after.releasable_amount, dec!(100));
    }

    #[test]
    fn test_revoked_schedule_is_frozen() {
        let mut schedule = linear_schedule();
        schedule.is_revoked = true;
        schedule.revoked_at = Some(3000);

        // Well past the end, but accrual stopped at 3000:
        // (3000 - 1000) / 4000 * 100 = 50.
        let progress = vesting_progress(&schedule, 100_000).unwrap();
        assert_eq!(progress.progress, dec!(50));
        assert_eq!(progress.releasable_amount, dec!(50));
        assert_eq!(progress.status, VestingStatus::Revoked);
        assert_eq!(progress.next_release_at, None);
    }

    #[test]
    fn test_revoked_before_revocation_instant_uses_now() {
        let mut schedule = linear_schedule();
        schedule.is_revoked = true;
        schedule.revoked_at = Some(4000);

        let progress = vesting_progress(&schedule, 3500).unwrap();
        assert_eq!(progress.progress, dec!(62.5));
        assert_eq!(progress.status, VestingStatus::Revoked);
    }

    // ============================================================================
    // Next release dates
    // ============================================================================

    #[test]
    fn test_linear_has_no_discrete_release_date() {
        let progress = vesting_progress(&linear_schedule(), 3500).unwrap();
        assert_eq!(progress.next_release_at, None);
    }

    #[test]
    fn test_cliff_next_release_is_cliff_end() {
        let mut schedule = linear_schedule();
        schedule.vesting_kind = VestingKind::Cliff;

        let before = vesting_progress(&schedule, 1500).unwrap();
        assert_eq!(before.next_release_at, Some(2000));

        let after = vesting_progress(&schedule, 2500).unwrap();
        assert_eq!(after.next_release_at, None);
    }

    #[test]
    fn test_stepped_next_release_on_thirty_day_boundary() {
        let schedule = VestingScheduleRecord {
            schedule_id: "sched-2".to_string(),
            token_symbol: "CFT".to_string(),
            total_amount: dec!(1000),
            released_amount: dec!(0),
            start_time: 0,
            cliff_end_time: 0,
            end_time: 365 * DAY,
            vesting_kind: VestingKind::Stepped,
            is_revoked: false,
            revoked_at: None,
        };

        // Mid-first interval: next boundary is day 30.
        let progress = vesting_progress(&schedule, 10 * DAY).unwrap();
        assert_eq!(progress.next_release_at, Some(30 * DAY));

        // Exactly on a boundary: the following one.
        let progress = vesting_progress(&schedule, 30 * DAY).unwrap();
        assert_eq!(progress.next_release_at, Some(60 * DAY));

        // Last partial interval is capped at the schedule end.
        let progress = vesting_progress(&schedule, 362 * DAY).unwrap();
        assert_eq!(progress.next_release_at, Some(365 * DAY));
    }

    #[test]
    fn test_milestone_has_no_predictable_date() {
        let mut schedule = linear_schedule();
        schedule.vesting_kind = VestingKind::Milestone;
        let progress = vesting_progress(&schedule, 3500).unwrap();
        assert_eq!(progress.next_release_at, None);
    }

    // ============================================================================
    // Validation
    // ============================================================================

    #[test]
    fn test_rejects_end_before_start() {
        let mut schedule = linear_schedule();
        schedule.end_time = 500;
        assert!(matches!(
            vesting_progress(&schedule, 3500),
            Err(VestingError::InvalidTimeRange { .. })
        ));
    }

    #[test]
    fn test_rejects_cliff_outside_range() {
        let mut schedule = linear_schedule();
        schedule.cliff_end_time = 6000;
        assert!(matches!(
            vesting_progress(&schedule, 3500),
            Err(VestingError::InvalidTimeRange { .. })
        ));
    }

    #[test]
    fn test_rejects_released_exceeding_total() {
        let mut schedule = linear_schedule();
        schedule.released_amount = dec!(150);
        assert!(matches!(
            vesting_progress(&schedule, 3500),
            Err(VestingError::ReleasedExceedsTotal { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_amounts() {
        let mut schedule = linear_schedule();
        schedule.released_amount = dec!(-1);
        assert!(matches!(
            vesting_progress(&schedule, 3500),
            Err(VestingError::NegativeAmount { .. })
        ));
    }
}
