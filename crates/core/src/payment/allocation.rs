//! Installment amount allocation.
//!
//! Splits a financed amount into equal installments, assigning the entire
//! fractional remainder to the first installment so the series sums exactly
//! to the financed amount, no cents lost or gained.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Splits `total` into `count` installments rounded to cents.
///
/// Every installment after the first carries the rounded-down base amount;
/// the first absorbs the remainder. Sum of the result EXACTLY equals `total`
/// rounded to cents.
#[must_use]
pub fn split_first_heavy(total: Decimal, count: u32) -> Vec<Decimal> {
    if count == 0 {
        return vec![];
    }

    let total = total.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    if count == 1 {
        return vec![total];
    }

    let count_dec = Decimal::from(count);
    let base = (total / count_dec).round_dp_with_strategy(2, RoundingStrategy::ToZero);
    let remainder = total - base * count_dec;

    (0..count)
        .map(|i| if i == 0 { base + remainder } else { base })
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_split_zero_count_is_empty() {
        assert!(split_first_heavy(dec!(100), 0).is_empty());
    }

    #[test]
    fn test_split_single() {
        assert_eq!(split_first_heavy(dec!(100), 1), vec![dec!(100)]);
    }

    #[test]
    fn test_split_even() {
        let result = split_first_heavy(dec!(900), 3);
        assert_eq!(result, vec![dec!(300), dec!(300), dec!(300)]);
    }

    #[test]
    fn test_split_remainder_goes_to_first() {
        // 100 / 3 = 33.33... -> [33.34, 33.33, 33.33]
        let result = split_first_heavy(dec!(100), 3);
        assert_eq!(result, vec![dec!(33.34), dec!(33.33), dec!(33.33)]);
        assert_eq!(result.iter().sum::<Decimal>(), dec!(100));
    }

    #[test]
    fn test_split_multi_cent_remainder_goes_to_first() {
        // 2.00 / 3: base 0.66, remainder 0.02 all on the first entry.
        let result = split_first_heavy(dec!(2), 3);
        assert_eq!(result, vec![dec!(0.68), dec!(0.66), dec!(0.66)]);
        assert_eq!(result.iter().sum::<Decimal>(), dec!(2));
    }

    #[test]
    fn test_split_sum_invariant() {
        let test_cases = [
            (dec!(100), 3),
            (dec!(100), 7),
            (dec!(1000), 12),
            (dec!(0.01), 3),
            (dec!(999.99), 7),
        ];

        for (total, count) in test_cases {
            let result = split_first_heavy(total, count);
            assert_eq!(
                result.iter().sum::<Decimal>(),
                total,
                "Sum invariant failed for total={total}, count={count}"
            );
        }
    }
}
