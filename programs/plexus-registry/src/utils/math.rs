use crate::error::ErrorCode;
use anchor_lang::prelude::*;
use plexus_pool::utils::BPS_DENOMINATOR;

/// Splits `total` into one share per weight: `floor(total * w / 10000)`.
///
/// Weights may add up to less than 10000; the shortfall and the rounding
/// remainder are simply not allocated. A sum above 10000 is rejected.
pub fn split_by_weights(total: u64, weights_bps: &[u16]) -> Result<Vec<u64>> {
    let weight_sum: u64 = weights_bps.iter().map(|w| u64::from(*w)).sum();
    require_gte!(
        BPS_DENOMINATOR,
        weight_sum,
        ErrorCode::WeightsExceedTotal
    );

    weights_bps
        .iter()
        .map(|w| {
            let share = u128::from(total) * u128::from(*w) / u128::from(BPS_DENOMINATOR);
            u64::try_from(share).map_err(|_| error!(ErrorCode::MathOverflow))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use quickcheck::{QuickCheck, TestResult};

    const UNIT: u64 = 1_000_000_000;

    #[test]
    fn splits_by_basis_points() {
        let shares = split_by_weights(100 * UNIT, &[2000, 3000, 5000]).unwrap();
        assert_eq!(shares, vec![20 * UNIT, 30 * UNIT, 50 * UNIT]);
    }

    #[test]
    fn shortfall_stays_unallocated() {
        let shares = split_by_weights(100, &[2500, 2500]).unwrap();
        assert_eq!(shares, vec![25, 25]);
    }

    #[test]
    fn rounding_floors_each_share() {
        let shares = split_by_weights(10, &[3333, 3333, 3334]).unwrap();
        assert_eq!(shares, vec![3, 3, 3]);
    }

    #[test]
    fn rejects_weights_above_total() {
        assert_eq!(
            split_by_weights(100, &[5000, 5001]).unwrap_err(),
            ErrorCode::WeightsExceedTotal.into()
        );
    }

    #[test]
    fn empty_split_is_empty() {
        assert!(split_by_weights(100, &[]).unwrap().is_empty());
    }

    #[test]
    fn shares_never_exceed_total() {
        fn prop(total: u64, weights: Vec<u16>) -> TestResult {
            let weights: Vec<u16> = weights.into_iter().map(|w| w % 2_500).take(4).collect();
            match split_by_weights(total, &weights) {
                Ok(shares) => {
                    let sum: u128 = shares.iter().map(|s| u128::from(*s)).sum();
                    TestResult::from_bool(sum <= u128::from(total))
                }
                Err(_) => TestResult::failed(),
            }
        }
        QuickCheck::new()
            .tests(500)
            .quickcheck(prop as fn(u64, Vec<u16>) -> TestResult);
    }

    proptest! {
        #[test]
        fn each_share_is_floored_fraction(
            total in 0u64..u64::MAX,
            weights in proptest::collection::vec(0u16..=10_000, 0..6),
        ) {
            let sum: u64 = weights.iter().map(|w| u64::from(*w)).sum();
            let result = split_by_weights(total, &weights);
            if sum > 10_000 {
                prop_assert!(result.is_err());
            } else {
                let shares = result.unwrap();
                prop_assert_eq!(shares.len(), weights.len());
                for (share, w) in shares.iter().zip(&weights) {
                    let expected = u128::from(total) * u128::from(*w) / 10_000;
                    prop_assert_eq!(u128::from(*share), expected);
                }
                let allocated: u128 = shares.iter().map(|s| u128::from(*s)).sum();
                prop_assert!(allocated <= u128::from(total));
            }
        }
    }
}
