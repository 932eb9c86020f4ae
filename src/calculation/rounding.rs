//! Won rounding helpers shared by every calculator.
//!
//! Payable amounts are truncated to a multiple of 10 won (원 단위 절사);
//! display amounts are rounded half-up to whole won. Products of request
//! values go through [`checked_product`], since `Decimal` multiplication
//! panics on overflow.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};

const TEN: Decimal = Decimal::TEN;

/// Truncates towards negative infinity to a multiple of 10 won.
///
/// # Examples
///
/// ```
/// use edupay_engine::calculation::floor_to_10;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(floor_to_10(Decimal::from_str("1953859.99").unwrap()), 1_953_850);
/// assert_eq!(floor_to_10(Decimal::from(75_090)), 75_090);
/// ```
pub fn floor_to_10(amount: Decimal) -> i64 {
    to_won((amount / TEN).floor() * TEN)
}

/// Rounds half-up to whole won (0.5 rounds towards positive infinity).
pub fn round_half_up(amount: Decimal) -> i64 {
    to_won((amount + Decimal::new(5, 1)).floor())
}

/// Rounds to whole won, half away from zero.
pub fn round_won(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Multiplies two values, reporting `field` as invalid input when the product
/// does not fit in a `Decimal`.
pub(crate) fn checked_product(a: Decimal, b: Decimal, field: &str) -> EngineResult<Decimal> {
    a.checked_mul(b)
        .ok_or_else(|| EngineError::invalid_input(field, "value is too large to calculate"))
}

/// Converts an integral decimal to won, saturating at the `i64` bounds.
pub(crate) fn to_won(amount: Decimal) -> i64 {
    amount.trunc().to_i64().unwrap_or(if amount.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_floor_to_10_truncates() {
        assert_eq!(floor_to_10(dec("1234.56")), 1230);
        assert_eq!(floor_to_10(dec("1239.99")), 1230);
        assert_eq!(floor_to_10(dec("1240")), 1240);
        assert_eq!(floor_to_10(Decimal::ZERO), 0);
    }

    #[test]
    fn test_floor_to_10_negative_goes_down() {
        assert_eq!(floor_to_10(dec("-5")), -10);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(dec("14167.5")), 14168);
        assert_eq!(round_half_up(dec("14167.49")), 14167);
        assert_eq!(round_half_up(dec("-0.5")), 0);
    }

    #[test]
    fn test_checked_product_reports_overflow_as_invalid_input() {
        assert_eq!(checked_product(dec("1.5"), dec("6"), "hours").unwrap(), dec("9"));
        match checked_product(Decimal::MAX, dec("2"), "hours") {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "hours"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_round_won_half_away_from_zero() {
        assert_eq!(round_won(dec("6666.5")), dec("6667"));
        assert_eq!(round_won(dec("6666.67")), dec("6667"));
        assert_eq!(round_won(dec("-2.5")), dec("-3"));
    }
}
