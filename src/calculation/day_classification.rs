//! Day classification for part-time contract teachers.
//!
//! Every calendar date of a contract period is assigned exactly one
//! [`DayCategory`] by layering user-supplied overrides on top of a
//! Semester default:
//!
//! 1. every date in the contract period starts as Semester;
//! 2. vacation intervals are applied in order, later ones overwriting
//!    earlier ones;
//! 3. non-operating intervals are applied last and win every conflict
//!    with a vacation interval.
//!
//! Intervals only ever overwrite dates that already belong to the contract;
//! the parts of an interval outside the period are clipped.

use crate::models::{ContractPeriod, DayCategory, DayClassification, OverrideInterval};

use super::date_range::DateRange;

/// Classifies every date of a contract period.
///
/// An inverted contract period (end before start) yields an empty
/// classification; inverted override intervals and intervals with a missing
/// bound contribute nothing.
///
/// # Examples
///
/// ```
/// use edupay_engine::calculation::classify_days;
/// use edupay_engine::models::{ContractPeriod, DayCategory, OverrideInterval};
/// use chrono::NaiveDate;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2025, m, day).unwrap();
/// let period = ContractPeriod { start: d(7, 1), end: d(8, 31) };
/// let vacations = vec![OverrideInterval::new(d(7, 21), d(8, 22))];
/// let non_operating = vec![OverrideInterval::new(d(8, 18), d(8, 22))];
///
/// let days = classify_days(&period, &vacations, &non_operating);
///
/// assert_eq!(days.len(), 62);
/// assert_eq!(days.get(d(7, 20)), Some(DayCategory::Semester));
/// assert_eq!(days.get(d(7, 21)), Some(DayCategory::Vacation));
/// assert_eq!(days.get(d(8, 18)), Some(DayCategory::NonOperating));
/// assert_eq!(days.count(DayCategory::Vacation), 28);
/// ```
pub fn classify_days(
    period: &ContractPeriod,
    vacations: &[OverrideInterval],
    non_operating: &[OverrideInterval],
) -> DayClassification {
    let contract = DateRange::new(period.start, period.end);
    let mut days = DayClassification::new();

    for date in contract.iter() {
        days.insert(date, DayCategory::Semester);
    }

    apply_overrides(&mut days, &contract, vacations, DayCategory::Vacation);
    apply_overrides(&mut days, &contract, non_operating, DayCategory::NonOperating);

    days
}

fn apply_overrides(
    days: &mut DayClassification,
    contract: &DateRange,
    intervals: &[OverrideInterval],
    category: DayCategory,
) {
    for interval in intervals {
        let clipped = contract.intersect(&DateRange::from_bounds(interval.start, interval.end));
        for date in clipped.iter() {
            days.overwrite(date, category);
        }
    }
}
