//! Weekend online-education stipend (학기 중 주말 온라인 교육).
//!
//! Education taken on a weekend during the semester is paid as overtime:
//! the base hourly wage times the overtime multiplier, truncated to 10 won,
//! times the education hours, truncated again.

use rust_decimal::Decimal;

use crate::config::StipendDefaults;
use crate::error::{EngineError, EngineResult};
use crate::models::{StipendStatus, WeekendEducationInput, WeekendEducationResult};

use super::rounding::{checked_product, floor_to_10};

/// Calculates the weekend online-education stipend.
///
/// The base hourly wage is the manual entry when `use_manual_hourly` is set,
/// else the snapshot's ordinary hourly wage. When the base wage, multiplier
/// or hours is zero the result is [`StipendStatus::Pending`] with a zero
/// amount; this is the normal state while inputs are still being entered.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when the base wage, multiplier or
/// hours is negative, or when their product is too large to calculate.
///
/// # Examples
///
/// ```
/// use edupay_engine::calculation::calculate_weekend_education;
/// use edupay_engine::config::StipendDefaults;
/// use edupay_engine::models::{StipendStatus, WeekendEducationInput};
/// use rust_decimal::Decimal;
///
/// let input = WeekendEducationInput {
///     use_manual_hourly: true,
///     manual_hourly_wage: Some(Decimal::new(12_345, 0)),
///     ..WeekendEducationInput::default()
/// };
/// let result = calculate_weekend_education(&input, &StipendDefaults::default()).unwrap();
///
/// assert_eq!(result.status, StipendStatus::Computed);
/// assert_eq!(result.overtime_hourly_wage, Some(18_510));
/// assert_eq!(result.amount, 111_060);
/// ```
pub fn calculate_weekend_education(
    input: &WeekendEducationInput,
    defaults: &StipendDefaults,
) -> EngineResult<WeekendEducationResult> {
    let base_hourly_wage = if input.use_manual_hourly {
        input.manual_hourly_wage.unwrap_or(Decimal::ZERO)
    } else {
        input
            .snapshot
            .as_ref()
            .map(|s| s.hourly_ordinary_wage)
            .unwrap_or(Decimal::ZERO)
    };
    let multiplier = input.multiplier.unwrap_or(defaults.weekend_multiplier);
    let hours = input.education_hours.unwrap_or(defaults.weekend_hours);

    for (field, value) in [
        ("base_hourly_wage", base_hourly_wage),
        ("multiplier", multiplier),
        ("education_hours", hours),
    ] {
        if value < Decimal::ZERO {
            return Err(EngineError::invalid_input(field, "must not be negative"));
        }
    }

    if base_hourly_wage.is_zero() || multiplier.is_zero() || hours.is_zero() {
        return Ok(WeekendEducationResult {
            status: StipendStatus::Pending,
            base_hourly_wage,
            overtime_hourly_wage: None,
            amount: 0,
        });
    }

    let overtime_hourly_wage =
        floor_to_10(checked_product(base_hourly_wage, multiplier, "base_hourly_wage")?);
    let amount = floor_to_10(checked_product(
        Decimal::from(overtime_hourly_wage),
        hours,
        "education_hours",
    )?);

    Ok(WeekendEducationResult {
        status: StipendStatus::Computed,
        base_hourly_wage,
        overtime_hourly_wage: Some(overtime_hourly_wage),
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrdinaryWageSnapshot;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn snapshot(hourly: &str) -> OrdinaryWageSnapshot {
        OrdinaryWageSnapshot {
            job: "조리실무사".to_string(),
            base_pay: 2_100_000,
            meal_allowance: 150_000,
            hourly_ordinary_wage: dec(hourly),
        }
    }

    #[test]
    fn test_uses_snapshot_hourly_wage() {
        let input = WeekendEducationInput {
            snapshot: Some(snapshot("13240.7")),
            ..WeekendEducationInput::default()
        };
        let result = calculate_weekend_education(&input, &StipendDefaults::default()).unwrap();

        // 13,240.7 x 1.5 = 19,861.05 -> 19,860; x 6 = 119,160
        assert_eq!(result.base_hourly_wage, dec("13240.7"));
        assert_eq!(result.overtime_hourly_wage, Some(19_860));
        assert_eq!(result.amount, 119_160);
    }

    #[test]
    fn test_manual_wage_ignored_unless_enabled() {
        let input = WeekendEducationInput {
            use_manual_hourly: false,
            manual_hourly_wage: Some(dec("99999")),
            snapshot: Some(snapshot("10000")),
            ..WeekendEducationInput::default()
        };
        let result = calculate_weekend_education(&input, &StipendDefaults::default()).unwrap();
        assert_eq!(result.overtime_hourly_wage, Some(15_000));
        assert_eq!(result.amount, 90_000);
    }

    #[test]
    fn test_custom_multiplier_and_hours() {
        let input = WeekendEducationInput {
            use_manual_hourly: true,
            manual_hourly_wage: Some(dec("11111")),
            multiplier: Some(dec("2")),
            education_hours: Some(dec("2.5")),
            snapshot: None,
        };
        let result = calculate_weekend_education(&input, &StipendDefaults::default()).unwrap();

        // 22,222 -> 22,220; x 2.5 = 55,550
        assert_eq!(result.overtime_hourly_wage, Some(22_220));
        assert_eq!(result.amount, 55_550);
    }

    #[test]
    fn test_pending_without_base_wage() {
        let result = calculate_weekend_education(
            &WeekendEducationInput::default(),
            &StipendDefaults::default(),
        )
        .unwrap();

        assert_eq!(result.status, StipendStatus::Pending);
        assert_eq!(result.overtime_hourly_wage, None);
        assert_eq!(result.amount, 0);
    }

    #[test]
    fn test_pending_with_zero_hours() {
        let input = WeekendEducationInput {
            snapshot: Some(snapshot("10000")),
            education_hours: Some(Decimal::ZERO),
            ..WeekendEducationInput::default()
        };
        let result = calculate_weekend_education(&input, &StipendDefaults::default()).unwrap();
        assert_eq!(result.status, StipendStatus::Pending);
    }

    #[test]
    fn test_negative_multiplier_rejected() {
        let input = WeekendEducationInput {
            snapshot: Some(snapshot("10000")),
            multiplier: Some(dec("-1.5")),
            ..WeekendEducationInput::default()
        };
        let result = calculate_weekend_education(&input, &StipendDefaults::default());
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_oversized_manual_wage_rejected() {
        let input = WeekendEducationInput {
            use_manual_hourly: true,
            manual_hourly_wage: Some(dec("70000000000000000000000000000")),
            ..WeekendEducationInput::default()
        };
        match calculate_weekend_education(&input, &StipendDefaults::default()) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "base_hourly_wage"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
