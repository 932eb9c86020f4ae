//! Monthly aggregation of classified contract days.

use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{DayClassification, MonthBucket, MonthKey};

/// Buckets classified days by calendar month.
///
/// Buckets are returned in ascending month order and every classified date
/// increments exactly one counter, so the bucket totals always add up to the
/// number of classified dates.
///
/// # Errors
///
/// Returns [`EngineError::EmptyClassification`] when no date was classified.
///
/// # Examples
///
/// ```
/// use edupay_engine::calculation::{aggregate_by_month, classify_days};
/// use edupay_engine::models::ContractPeriod;
/// use chrono::NaiveDate;
///
/// let period = ContractPeriod {
///     start: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
/// };
/// let buckets = aggregate_by_month(&classify_days(&period, &[], &[])).unwrap();
///
/// assert_eq!(buckets.len(), 1);
/// assert_eq!(buckets[0].month.to_string(), "2025-03");
/// assert_eq!(buckets[0].semester_days, 31);
/// ```
pub fn aggregate_by_month(days: &DayClassification) -> EngineResult<Vec<MonthBucket>> {
    if days.is_empty() {
        return Err(EngineError::EmptyClassification);
    }

    let mut buckets: BTreeMap<MonthKey, MonthBucket> = BTreeMap::new();
    for (date, category) in days.iter() {
        let month = MonthKey::of(date);
        buckets
            .entry(month)
            .or_insert_with(|| MonthBucket::empty(month))
            .record(category);
    }

    Ok(buckets.into_values().collect())
}
