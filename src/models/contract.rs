//! Contract period, day category and month bucket models.
//!
//! This module contains the types that flow through the contract teacher
//! pipeline: the [`ContractPeriod`] and [`OverrideInterval`] inputs, the
//! derived [`DayClassification`], and the per-month [`MonthBucket`] counts.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::calculation::parse_date;

/// The inclusive date range covered by a part-time teacher's contract.
///
/// # Example
///
/// ```
/// use edupay_engine::models::ContractPeriod;
/// use chrono::NaiveDate;
///
/// let period = ContractPeriod {
///     start: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
/// };
///
/// assert!(period.is_valid());
/// assert_eq!(period.day_count(), 365);
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractPeriod {
    /// First day of the contract (inclusive).
    pub start: NaiveDate,
    /// Last day of the contract (inclusive).
    pub end: NaiveDate,
}

impl ContractPeriod {
    /// Returns true when `start <= end`.
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// Number of calendar days in the period, or zero when inverted.
    pub fn day_count(&self) -> usize {
        if self.is_valid() {
            ((self.end - self.start).num_days() + 1) as usize
        } else {
            0
        }
    }

    /// Checks if a date falls within the period (inclusive on both ends).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// The category assigned to a single calendar day within a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCategory {
    /// 학기중 - a regular semester day, 4 work hours.
    Semester,
    /// 방학 - a vacation day, 8 work hours.
    Vacation,
    /// 미운영 - an after-school non-operating day, paid at 4 work hours.
    NonOperating,
}

impl fmt::Display for DayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayCategory::Semester => write!(f, "Semester"),
            DayCategory::Vacation => write!(f, "Vacation"),
            DayCategory::NonOperating => write!(f, "NonOperating"),
        }
    }
}

/// A user-supplied date interval that overrides the default Semester category.
///
/// Intervals may extend past the contract period; dates outside the contract
/// are clipped during classification rather than rejected. A blank or
/// unparseable bound deserializes to `None` and the interval then covers no
/// dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideInterval {
    /// First day of the interval (inclusive).
    #[serde(default, deserialize_with = "lenient_date")]
    pub start: Option<NaiveDate>,
    /// Last day of the interval (inclusive).
    #[serde(default, deserialize_with = "lenient_date")]
    pub end: Option<NaiveDate>,
    /// Free-form label shown next to the interval (e.g. "여름방학 2차").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl OverrideInterval {
    /// Creates an interval without a note.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            note: None,
        }
    }
}

/// Reads an optional `YYYY-MM-DD` string; blank or invalid text becomes `None`.
pub(crate) fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let text: Option<String> = Option::deserialize(deserializer)?;
    Ok(text.as_deref().and_then(parse_date))
}

/// Mapping from every date of a contract period to its [`DayCategory`].
///
/// Dates are kept in ascending order. A classification only ever contains
/// dates of the contract it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClassification {
    days: BTreeMap<NaiveDate, DayCategory>,
}

impl DayClassification {
    /// Creates an empty classification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the category for a date.
    pub(crate) fn insert(&mut self, date: NaiveDate, category: DayCategory) {
        self.days.insert(date, category);
    }

    /// Overwrites the category of a date only if the date is already present.
    ///
    /// Returns `true` when the date was present and updated.
    pub(crate) fn overwrite(&mut self, date: NaiveDate, category: DayCategory) -> bool {
        match self.days.get_mut(&date) {
            Some(slot) => {
                *slot = category;
                true
            }
            None => false,
        }
    }

    /// Returns the category for a date, if it was classified.
    pub fn get(&self, date: NaiveDate) -> Option<DayCategory> {
        self.days.get(&date).copied()
    }

    /// Number of classified dates.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns true when no date was classified.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterates over `(date, category)` pairs in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, DayCategory)> + '_ {
        self.days.iter().map(|(date, category)| (*date, *category))
    }

    /// Counts the dates assigned to the given category.
    pub fn count(&self, category: DayCategory) -> usize {
        self.days.values().filter(|c| **c == category).count()
    }
}

/// Error returned when a month key string is not in `YYYY-MM` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMonthKeyError(String);

impl fmt::Display for ParseMonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid month key '{}', expected YYYY-MM", self.0)
    }
}

impl std::error::Error for ParseMonthKeyError {}

/// A calendar month, rendered as `YYYY-MM`.
///
/// Ordering is chronological (year, then month), which matches a
/// lexicographic sort of the rendered keys.
///
/// # Example
///
/// ```
/// use edupay_engine::models::MonthKey;
///
/// let key: MonthKey = "2025-03".parse().unwrap();
/// assert_eq!(key.year, 2025);
/// assert_eq!(key.month, 3);
/// assert_eq!(key.to_string(), "2025-03");
/// assert_eq!(key.days_in_month(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
}

impl MonthKey {
    /// Returns the month a date falls in.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Number of calendar days in this month.
    pub fn days_in_month(&self) -> u32 {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        match (
            NaiveDate::from_ymd_opt(self.year, self.month, 1),
            NaiveDate::from_ymd_opt(next_year, next_month, 1),
        ) {
            (Some(first), Some(next)) => (next - first).num_days() as u32,
            _ => 0,
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = ParseMonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseMonthKeyError(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}

impl TryFrom<String> for MonthKey {
    type Error = ParseMonthKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

/// Day counts for one calendar month of a contract.
///
/// Buckets are produced by the monthly aggregator and may be edited by the
/// user before they are handed to the wage calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    /// The month these counts belong to.
    pub month: MonthKey,
    /// Calendar days classified as semester days.
    #[serde(default)]
    pub semester_days: u32,
    /// Calendar days classified as vacation days.
    #[serde(default)]
    pub vacation_days: u32,
    /// Calendar days classified as non-operating days.
    #[serde(default)]
    pub non_operating_days: u32,
}

impl MonthBucket {
    /// Creates an empty bucket for a month.
    pub fn empty(month: MonthKey) -> Self {
        Self {
            month,
            semester_days: 0,
            vacation_days: 0,
            non_operating_days: 0,
        }
    }

    /// Increments the counter matching `category`.
    pub fn record(&mut self, category: DayCategory) {
        match category {
            DayCategory::Semester => self.semester_days += 1,
            DayCategory::Vacation => self.vacation_days += 1,
            DayCategory::NonOperating => self.non_operating_days += 1,
        }
    }

    /// Sum of all three counters, widened so edited rows cannot overflow.
    pub fn total_days(&self) -> u64 {
        u64::from(self.semester_days)
            + u64::from(self.vacation_days)
            + u64::from(self.non_operating_days)
    }

    /// Days worked at the semester daily hours (Semester plus NonOperating).
    pub fn semester_rate_days(&self) -> u64 {
        u64::from(self.semester_days) + u64::from(self.non_operating_days)
    }
}
