//! Inclusive calendar date ranges.
//!
//! A [`DateRange`] enumerates every date between two bounds. An inverted or
//! missing bound yields an empty range instead of an error, so callers can
//! feed unvalidated user input straight through.

use chrono::{Days, NaiveDate};

/// An inclusive, possibly empty, range of calendar dates.
///
/// The range is a value: [`DateRange::iter`] can be called any number of
/// times and each iterator starts from the first date again.
///
/// # Examples
///
/// ```
/// use edupay_engine::calculation::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 2, 27).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
/// );
/// assert_eq!(range.len(), 4);
///
/// let inverted = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 27).unwrap(),
/// );
/// assert!(inverted.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    bounds: Option<(NaiveDate, NaiveDate)>,
}

impl DateRange {
    /// Creates a range from `start` to `end` inclusive; empty when `end < start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            bounds: (start <= end).then_some((start, end)),
        }
    }

    /// Creates a range from optional bounds; empty when either is missing.
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            _ => Self::empty(),
        }
    }

    /// The empty range.
    pub fn empty() -> Self {
        Self { bounds: None }
    }

    /// Returns the first and last date, or `None` for an empty range.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.bounds
    }

    /// Number of dates in the range.
    pub fn len(&self) -> usize {
        self.bounds
            .map(|(start, end)| ((end - start).num_days() + 1) as usize)
            .unwrap_or(0)
    }

    /// Returns true when the range contains no dates.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Checks if a date falls within the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.bounds
            .is_some_and(|(start, end)| date >= start && date <= end)
    }

    /// Returns the overlap of two ranges.
    pub fn intersect(&self, other: &DateRange) -> DateRange {
        match (self.bounds, other.bounds) {
            (Some((a_start, a_end)), Some((b_start, b_end))) => {
                DateRange::new(a_start.max(b_start), a_end.min(b_end))
            }
            _ => DateRange::empty(),
        }
    }

    /// Iterates the dates in ascending order.
    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: self.bounds.map(|(start, _)| start),
            end: self.bounds.map(|(_, end)| end),
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the dates of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    next: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl Iterator for DateRangeIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let end = self.end?;
        if current > end {
            self.next = None;
            return None;
        }
        self.next = current.checked_add_days(Days::new(1));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.next, self.end) {
            (Some(next), Some(end)) if next <= end => {
                let remaining = ((end - next).num_days() + 1) as usize;
                (remaining, Some(remaining))
            }
            _ => (0, Some(0)),
        }
    }
}

/// Parses a `YYYY-MM-DD` date, returning `None` for blank or invalid text.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}
