//! Basis-point arithmetic for reward accrual.
//!
//! Every result is floored (truncated towards zero). Products that can exceed
//! `u128` are carried out in [`U256`].

use crate::error::ErrorCode;
use anchor_lang::prelude::*;

mod u256 {
    use uint::construct_uint;

    construct_uint! {
        pub struct U256(4);
    }
}
pub use u256::U256;

/// Denominator of every rate and weight.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// `amount * bps / 10000`, floored.
pub fn apply_bps(amount: u64, bps: u64) -> Result<u64> {
    let value = u128::from(amount)
        .checked_mul(u128::from(bps))
        .ok_or(ErrorCode::MathOverflow)?
        / u128::from(BPS_DENOMINATOR);
    u64::try_from(value).map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Seconds between `since` and `now`, zero if the clock reads earlier than `since`.
pub fn elapsed_seconds(since: i64, now: i64) -> u64 {
    u64::try_from(now.saturating_sub(since)).unwrap_or(0)
}

/// Linear reward earned by `principal` over `elapsed` seconds.
///
/// `principal * min(elapsed, duration) * rate_bps / (10000 * duration)`.
/// Elapsed time beyond one full lock duration earns nothing extra.
pub fn linear_accrual(
    principal: u64,
    elapsed: u64,
    rate_bps: u64,
    duration: u64,
) -> Result<u64> {
    require_gt!(duration, 0, ErrorCode::InvalidConfig);
    if principal == 0 || elapsed == 0 {
        return Ok(0);
    }
    let vested = elapsed.min(duration);
    let numerator = U256::from(principal)
        .checked_mul(U256::from(vested))
        .and_then(|x| x.checked_mul(U256::from(rate_bps)))
        .ok_or(ErrorCode::MathOverflow)?;
    let denominator = U256::from(BPS_DENOMINATOR) * U256::from(duration);
    let accrued = numerator / denominator;
    if accrued > U256::from(u64::MAX) {
        return err!(ErrorCode::MathOverflow);
    }
    Ok(accrued.as_u64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use quickcheck::QuickCheck;

    #[test]
    fn apply_bps_floors() {
        assert_eq!(apply_bps(5_000_000_000, 600).unwrap(), 300_000_000);
        assert_eq!(apply_bps(9_999, 1).unwrap(), 0);
        assert_eq!(apply_bps(10_001, 1).unwrap(), 1);
        assert_eq!(apply_bps(u64::MAX, 10_000).unwrap(), u64::MAX);
    }

    #[test]
    fn apply_bps_rejects_results_above_u64() {
        assert!(apply_bps(u64::MAX, 10_001).is_err());
    }

    #[test]
    fn apply_bps_never_exceeds_amount_at_full_rate() {
        fn prop(amount: u64, bps: u16) -> bool {
            let bps = u64::from(bps) % (BPS_DENOMINATOR + 1);
            apply_bps(amount, bps).map_or(false, |v| v <= amount)
        }
        QuickCheck::new()
            .tests(1_000)
            .quickcheck(prop as fn(u64, u16) -> bool);
    }

    #[test]
    fn elapsed_never_negative() {
        assert_eq!(elapsed_seconds(100, 50), 0);
        assert_eq!(elapsed_seconds(100, 100), 0);
        assert_eq!(elapsed_seconds(100, 701), 601);
    }

    #[test]
    fn accrual_matches_sequential_division() {
        // 5 units at 600 bps over 301 of 600 seconds.
        let principal = 5_000_000_000u64;
        let expected = principal * 301 * 600 / 10_000 / 600;
        assert_eq!(linear_accrual(principal, 301, 600, 600).unwrap(), expected);
    }

    #[test]
    fn accrual_caps_at_one_lock_period() {
        let principal = 10_000_000_000u64;
        let full = linear_accrual(principal, 600, 600, 600).unwrap();
        assert_eq!(full, apply_bps(principal, 600).unwrap());
        assert_eq!(linear_accrual(principal, 6_000_000, 600, 600).unwrap(), full);
    }

    #[test]
    fn accrual_survives_wide_products() {
        let accrued = linear_accrual(u64::MAX, u64::MAX, 10_000, u64::MAX).unwrap();
        assert_eq!(accrued, u64::MAX);
    }

    #[test]
    fn accrual_rejects_zero_duration() {
        assert!(linear_accrual(1, 1, 1, 0).is_err());
    }

    proptest! {
        #[test]
        fn accrual_never_exceeds_projection(
            principal in 0u64..1_000_000_000_000_000u64,
            elapsed in 0u64..10_000_000u64,
            rate in 1u64..50_000u64,
            duration in 1u64..1_000_000u64,
        ) {
            let accrued = linear_accrual(principal, elapsed, rate, duration).unwrap();
            let cap = apply_bps(principal, rate).unwrap();
            prop_assert!(accrued <= cap);
            if elapsed >= duration {
                prop_assert_eq!(accrued, cap);
            }
        }

        #[test]
        fn accrual_is_monotone_in_time(
            principal in 0u64..1_000_000_000_000u64,
            t1 in 0u64..2_000_000u64,
            t2 in 0u64..2_000_000u64,
            rate in 1u64..20_000u64,
            duration in 1u64..1_000_000u64,
        ) {
            let (a, b) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            let r1 = linear_accrual(principal, a, rate, duration).unwrap();
            let r2 = linear_accrual(principal, b, rate, duration).unwrap();
            prop_assert!(r1 <= r2);
        }

        #[test]
        fn accrual_matches_reference_formula(
            principal in 0u64..1_000_000_000_000u64,
            elapsed in 0u64..5_000u64,
            rate in 1u64..10_000u64,
            duration in 1u64..5_000u64,
        ) {
            let vested = u128::from(elapsed.min(duration));
            let expected = u128::from(principal) * vested * u128::from(rate)
                / (10_000u128 * u128::from(duration));
            prop_assert_eq!(
                u128::from(linear_accrual(principal, elapsed, rate, duration).unwrap()),
                expected
            );
        }
    }
}
