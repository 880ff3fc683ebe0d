//! Reward accrual: pure, side-effect-free claimable-amount computation.
//!
//! Linear accrual releases `total / FULL_VEST_DURATION_SECS` base units per
//! second (integer division; the rounding-down bias is intentional and part of
//! the observable behavior). Elapsed time is measured from `accrual_anchor`,
//! which is set at admission and deliberately not moved on claim.

use crate::constants::FULL_VEST_DURATION_SECS;
use crate::error::VestingError;
use crate::state::EntitlementRecord;

/// How a successful claim pays out, selected by the instance's admission gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimPolicy {
    /// Whole remaining entitlement in one transfer after unlock.
    LumpSum,
    /// Gradual per-second release after unlock.
    Linear,
}

/// Linearly accrued claimable amount at `now`, capped at the remaining
/// entitlement. Zero before the unlock time.
pub fn accrue(record: &EntitlementRecord, now: i64) -> Result<u64, VestingError> {
    if now < record.unlock_time {
        return Ok(0);
    }
    let remaining = record.eligible_amount()?;
    let rate = record.total_amount / FULL_VEST_DURATION_SECS as u64;
    let elapsed = now
        .checked_sub(record.accrual_anchor)
        .ok_or(VestingError::MathOverflow)?;
    if elapsed < 0 {
        return Ok(0);
    }
    let accrued = (elapsed as u128)
        .checked_mul(rate as u128)
        .ok_or(VestingError::MathOverflow)?;
    Ok(accrued.min(remaining as u128) as u64)
}

/// Claimable amount at `now` under the given policy.
pub fn claimable(
    policy: ClaimPolicy,
    record: &EntitlementRecord,
    now: i64,
) -> Result<u64, VestingError> {
    match policy {
        ClaimPolicy::LumpSum => {
            if now < record.unlock_time {
                Ok(0)
            } else {
                record.eligible_amount()
            }
        }
        ClaimPolicy::Linear => accrue(record, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    const UNLOCK: i64 = 1_700_000_000;

    fn record(total: u64, claimed: u64) -> EntitlementRecord {
        EntitlementRecord {
            beneficiary: Pubkey::new_from_array([1; 32]),
            total_amount: total,
            claimed_amount: claimed,
            unlock_time: UNLOCK,
            accrual_anchor: UNLOCK,
            ..Default::default()
        }
    }

    #[test]
    fn nothing_accrues_before_unlock() {
        let r = record(1_000_000_000_000, 0);
        assert_eq!(accrue(&r, UNLOCK - 1).unwrap(), 0);
        assert_eq!(claimable(ClaimPolicy::LumpSum, &r, UNLOCK - 1).unwrap(), 0);
    }

    #[test]
    fn one_second_of_linear_accrual() {
        // 10_000 display units at 9 decimals.
        let total = 10_000_000_000_000u64;
        let r = record(total, 0);
        let rate = total / FULL_VEST_DURATION_SECS as u64;
        assert_eq!(accrue(&r, UNLOCK + 1).unwrap(), rate);
        assert_eq!(accrue(&r, UNLOCK + 10).unwrap(), 10 * rate);
    }

    #[test]
    fn rate_truncates_toward_zero() {
        // Totals below the vest duration accrue nothing per second.
        let r = record(10_000, 0);
        assert_eq!(accrue(&r, UNLOCK + 1).unwrap(), 0);
        assert_eq!(accrue(&r, UNLOCK + FULL_VEST_DURATION_SECS).unwrap(), 0);
    }

    #[test]
    fn accrual_is_monotone_and_bounded() {
        let total = 1_000_000_000u64;
        let r = record(total, 0);
        let mut last = 0;
        for t in [0i64, 1, 60, 3_600, 86_400, FULL_VEST_DURATION_SECS, FULL_VEST_DURATION_SECS * 4]
        {
            let a = accrue(&r, UNLOCK + t).unwrap();
            assert!(a >= last);
            assert!(a <= total);
            last = a;
        }
        assert_eq!(last, total);
    }

    #[test]
    fn accrual_capped_at_remaining_after_claims() {
        let total = 1_000_000_000u64;
        let r = record(total, 400_000_000);
        // Far past the full vest window the cap is what is left, not the total.
        let a = accrue(&r, UNLOCK + FULL_VEST_DURATION_SECS * 10).unwrap();
        assert_eq!(a, 600_000_000);
    }

    #[test]
    fn anchor_not_moved_on_claim_measures_from_unlock() {
        // Repeated claims keep measuring elapsed time from the unlock point,
        // so successive claim windows overlap, bounded only by `remaining`.
        let total = 2_592_000_000u64; // rate = 1_000/s
        let mut r = record(total, 0);
        let first = accrue(&r, UNLOCK + 100).unwrap();
        assert_eq!(first, 100_000);
        r.record_claim(first).unwrap();
        // One second later the window is 101s, minus what was claimed.
        let second = accrue(&r, UNLOCK + 101).unwrap();
        assert_eq!(second, 101_000.min(total - first));
        assert_eq!(second, 101_000);
    }

    #[test]
    fn lump_sum_releases_everything_at_once() {
        let r = record(5_000, 0);
        assert_eq!(claimable(ClaimPolicy::LumpSum, &r, UNLOCK).unwrap(), 5_000);
        assert_eq!(
            claimable(ClaimPolicy::LumpSum, &r, UNLOCK + 1).unwrap(),
            5_000
        );
    }

    #[test]
    fn idempotent_without_state_change() {
        let r = record(1_000_000_000, 0);
        let t = UNLOCK + 12_345;
        assert_eq!(accrue(&r, t).unwrap(), accrue(&r, t).unwrap());
    }
}
