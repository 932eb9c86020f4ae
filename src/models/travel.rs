//! Travel expense (여비) models for the worker calculator and the auditor.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A trip within the home jurisdiction (관내 출장).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalTripInput {
    /// Round-trip distance in kilometres.
    #[serde(default)]
    pub distance_km: Decimal,
    /// Trip duration in hours.
    pub hours: Decimal,
    /// Whether an official or rental vehicle was used.
    #[serde(default)]
    pub official_vehicle: bool,
    /// Actual fare and meal cost for short-distance trips, in won.
    #[serde(default)]
    pub actual_expense: i64,
}

/// How a local trip was reimbursed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalTripBasis {
    /// Round trip of 2 km or less, reimbursed at actual cost up to a cap.
    ShortDistanceActual,
    /// Regular local trip at the flat rate.
    FlatRate,
}

/// Expected reimbursement for a single local trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalTripResult {
    /// Which rule produced the amount.
    pub basis: LocalTripBasis,
    /// Amount for this trip, in won.
    pub amount: i64,
    /// Cap applied to short-distance actual expenses, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cap: Option<i64>,
    /// Explanatory notes for the reviewer.
    pub notes: Vec<String>,
}

/// Lodging cap region for long-distance trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LodgingRegion {
    /// Seoul.
    Seoul,
    /// Metropolitan cities (광역시).
    Metro,
    /// Everywhere else, including Sejong and Jeju.
    #[default]
    Other,
}

/// A trip outside the home jurisdiction (관외 출장).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongDistanceTripInput {
    /// Number of trip days.
    pub days: u32,
    /// Number of nights.
    #[serde(default)]
    pub nights: u32,
    /// Lodging cap region.
    #[serde(default)]
    pub region: LodgingRegion,
    /// Lodging actually spent, in won.
    #[serde(default)]
    pub lodging_spent: i64,
    /// Whether the 30% unavoidable-circumstance lodging surcharge applies.
    #[serde(default)]
    pub lodging_surcharge: bool,
    /// Days on which an official or rental vehicle was used.
    #[serde(default)]
    pub vehicle_days: u32,
    /// Whether airline mileage was used for the fare.
    #[serde(default)]
    pub mileage_used: bool,
    /// Number of free meals provided.
    #[serde(default)]
    pub meals_provided: u32,
    /// Long-stay per-diem reduction rate (1.0 means no reduction).
    #[serde(default = "default_long_stay_rate")]
    pub long_stay_rate: Decimal,
    /// Fare actually paid, in won.
    #[serde(default)]
    pub fare: i64,
}

fn default_long_stay_rate() -> Decimal {
    Decimal::ONE
}

/// Expected reimbursement for a long-distance trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongDistanceTripResult {
    /// Fare, in won.
    pub fare: i64,
    /// Per diem after vehicle-day halving and long-stay reduction.
    pub per_diem: i64,
    /// Additional per diem for airline mileage use.
    pub per_diem_mileage_bonus: i64,
    /// Meal allowance after free-meal deductions.
    pub meals: i64,
    /// Lodging cap for the whole trip.
    pub lodging_cap: i64,
    /// Lodging reimbursed (lesser of spent and cap).
    pub lodging_allowed: i64,
    /// Sum of all components.
    pub total: i64,
    /// Explanatory notes for the reviewer.
    pub notes: Vec<String>,
}

/// Inputs for verifying a month's local travel expense disbursement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAuditInput {
    /// Label shown on the report.
    #[serde(default)]
    pub label: String,
    /// Total on the disbursement resolution (지출결의), in won.
    pub decided_total: i64,
    /// Number of half-day trips.
    #[serde(default)]
    pub half_day_count: i64,
    /// Number of full-day trips.
    #[serde(default)]
    pub full_day_count: i64,
    /// Unit price of a half-day trip.
    pub unit_half: i64,
    /// Unit price of a full-day trip.
    pub unit_full: i64,
}

/// Outcome of comparing a paid amount against the expected amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "difference", rename_all = "snake_case")]
pub enum PaymentVerdict {
    /// Paid equals expected.
    Match,
    /// Paid exceeds expected by the given amount.
    Overpaid(i64),
    /// Paid falls short of expected by the given amount.
    Underpaid(i64),
}

impl PaymentVerdict {
    /// Classifies `paid - expected`.
    pub fn from_difference(difference: i64) -> Self {
        match difference {
            0 => PaymentVerdict::Match,
            d if d > 0 => PaymentVerdict::Overpaid(d),
            d => PaymentVerdict::Underpaid(-d),
        }
    }

    /// Returns true for [`PaymentVerdict::Match`].
    pub fn is_match(&self) -> bool {
        matches!(self, PaymentVerdict::Match)
    }
}

impl fmt::Display for PaymentVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentVerdict::Match => write!(f, "match"),
            PaymentVerdict::Overpaid(amount) => write!(f, "mismatch, overpaid by {amount}"),
            PaymentVerdict::Underpaid(amount) => write!(f, "mismatch, underpaid by {amount}"),
        }
    }
}

/// Result of the monthly verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAuditResult {
    /// Report label.
    pub label: String,
    /// Half-day count times unit price.
    pub half_day_subtotal: i64,
    /// Full-day count times unit price.
    pub full_day_subtotal: i64,
    /// Expected total under the regulation.
    pub expected_total: i64,
    /// Total on the disbursement resolution.
    pub decided_total: i64,
    /// Decided minus expected.
    pub difference: i64,
    /// Classification of the difference.
    pub verdict: PaymentVerdict,
    /// Human-readable summary.
    pub message: String,
}

/// Local trip length class used by the detail rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    /// Under 4 hours (반일).
    #[default]
    Half,
    /// 4 hours or more (종일).
    Full,
}

/// One row of an individual payment listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRow {
    /// Payee name.
    #[serde(default)]
    pub name: String,
    /// Trip type.
    #[serde(default, rename = "type")]
    pub trip_type: TripType,
    /// Amount actually paid, in won.
    #[serde(default)]
    pub paid: i64,
}

/// Inputs for verifying individual payment rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailAuditInput {
    /// Unit price of a half-day trip.
    pub unit_half: i64,
    /// Unit price of a full-day trip.
    pub unit_full: i64,
    /// The rows to verify.
    #[serde(default)]
    pub rows: Vec<PaymentRow>,
}

/// Verification outcome for a single row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowAuditResult {
    /// 1-based row number.
    pub row_number: usize,
    /// Payee name, trimmed.
    pub name: String,
    /// Expected amount, absent for skipped rows.
    pub expected: Option<i64>,
    /// Verdict, absent for skipped rows.
    pub verdict: Option<PaymentVerdict>,
    /// Rendered verdict ("match", "mismatch, underpaid by 1000", "no input").
    pub message: String,
}

/// Summary of the row-by-row verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailAuditResult {
    /// Per-row outcomes, in input order.
    pub rows: Vec<RowAuditResult>,
    /// Sum of expected amounts of non-skipped rows.
    pub total_expected: i64,
    /// Sum of paid amounts of non-skipped rows.
    pub total_paid: i64,
    /// Total paid minus total expected.
    pub difference: i64,
    /// Number of rows whose verdict is not a match.
    pub mismatch_count: usize,
}
