//! Vacation group-training stipend (방학 집체교육 수당).
//!
//! Staff who attend mandatory group training during a vacation are paid by
//! the hour, using an hourly wage derived from base pay plus meal allowance:
//!
//! ```text
//! monthly  = base pay + meal allowance
//! daily    = floor10(monthly / calendar days)
//! hourly   = floor10(daily / 8)
//! training = floor10(hourly × training hours)
//! minimum  = floor10(minimum hourly wage × training hours)
//! ```
//!
//! If the training pay falls below the minimum-wage amount the difference is
//! paid as a top-up, so the stipend is never below the statutory minimum.

use rust_decimal::Decimal;

use crate::config::StipendDefaults;
use crate::error::{EngineError, EngineResult};
use crate::models::{VacationTrainingInput, VacationTrainingResult};

use super::rounding::{checked_product, floor_to_10};

/// Calculates the vacation group-training stipend.
///
/// Base pay and meal allowance are taken from the input when given, else
/// from the ordinary-wage snapshot. Calendar days, training hours and the
/// minimum hourly wage fall back to `defaults`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when the base pay, calendar days,
/// training hours or minimum wage is missing or not positive, when the meal
/// allowance is negative, or when the training hours are too large to
/// calculate.
///
/// # Examples
///
/// ```
/// use edupay_engine::calculation::calculate_vacation_training;
/// use edupay_engine::config::StipendDefaults;
/// use edupay_engine::models::VacationTrainingInput;
///
/// let input = VacationTrainingInput {
///     basic_pay: Some(2_184_000),
///     meal_allowance: Some(150_000),
///     ..VacationTrainingInput::default()
/// };
/// let result = calculate_vacation_training(&input, &StipendDefaults::default()).unwrap();
///
/// assert_eq!(result.daily_wage, 75_290);
/// assert_eq!(result.hourly_wage, 9_410);
/// assert_eq!(result.training_pay, 56_460);
/// assert_eq!(result.minimum_wage_top_up, 3_720);
/// assert_eq!(result.final_pay, 60_180);
/// ```
pub fn calculate_vacation_training(
    input: &VacationTrainingInput,
    defaults: &StipendDefaults,
) -> EngineResult<VacationTrainingResult> {
    let snapshot = input.snapshot.as_ref();

    let basic_pay = input
        .basic_pay
        .or(snapshot.map(|s| s.base_pay))
        .unwrap_or(0);
    if basic_pay <= 0 {
        return Err(EngineError::invalid_input(
            "basic_pay",
            "base pay must be greater than zero",
        ));
    }

    let meal_allowance = input
        .meal_allowance
        .or(snapshot.map(|s| s.meal_allowance))
        .unwrap_or(0);
    if meal_allowance < 0 {
        return Err(EngineError::invalid_input(
            "meal_allowance",
            "meal allowance must not be negative",
        ));
    }

    let calendar_days = input.calendar_days.unwrap_or(defaults.calendar_days);
    if calendar_days == 0 {
        return Err(EngineError::invalid_input(
            "calendar_days",
            "calendar days must be greater than zero",
        ));
    }

    let training_hours = input.training_hours.unwrap_or(defaults.training_hours);
    if training_hours <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "training_hours",
            "training hours must be greater than zero",
        ));
    }

    let minimum_hourly_wage = input
        .minimum_hourly_wage
        .unwrap_or(defaults.minimum_hourly_wage);
    if minimum_hourly_wage <= 0 {
        return Err(EngineError::invalid_input(
            "minimum_hourly_wage",
            "minimum hourly wage must be greater than zero",
        ));
    }

    if defaults.hours_per_day <= Decimal::ZERO {
        return Err(EngineError::InvalidConfig {
            message: "stipend hours_per_day must be greater than zero".to_string(),
        });
    }

    let monthly_wage = basic_pay.saturating_add(meal_allowance);
    let daily_wage = floor_to_10(Decimal::from(monthly_wage) / Decimal::from(calendar_days));
    let hourly_wage = floor_to_10(Decimal::from(daily_wage) / defaults.hours_per_day);
    let training_pay = floor_to_10(checked_product(
        Decimal::from(hourly_wage),
        training_hours,
        "training_hours",
    )?);
    let minimum_wage_pay = floor_to_10(checked_product(
        Decimal::from(minimum_hourly_wage),
        training_hours,
        "training_hours",
    )?);

    let (minimum_wage_top_up, final_pay) = if training_pay < minimum_wage_pay {
        (minimum_wage_pay - training_pay, minimum_wage_pay)
    } else {
        (0, training_pay)
    };

    Ok(VacationTrainingResult {
        monthly_wage,
        daily_wage,
        hourly_wage,
        training_pay,
        minimum_wage_pay,
        minimum_wage_top_up,
        final_pay,
        calendar_days,
        training_hours,
    })
}
