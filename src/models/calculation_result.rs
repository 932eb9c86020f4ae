//! Calculation result models for the contract teacher labor-cost calculator.
//!
//! This module contains the [`ContractWageResult`] type and its associated
//! structures: the derived [`PayRates`], one [`MonthlyWageLine`] per month,
//! the [`ContractWageTotals`] and the [`AuditTrace`] recording every decision.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MonthKey;

/// Hourly pay rates derived once per calculation and reused for every month.
///
/// # Example
///
/// ```
/// use edupay_engine::models::PayRates;
/// use rust_decimal::Decimal;
///
/// let rates = PayRates {
///     base_pay_semester: 1_227_850,
///     base_pay_vacation: 2_455_700,
///     semester_monthly_total: 1_227_850,
///     vacation_monthly_total: 2_455_700,
///     semester_hourly_rate: Decimal::new(14_167, 0),
///     vacation_hourly_rate: Decimal::new(14_167, 0),
/// };
/// assert_eq!(rates.base_pay_vacation, 2 * rates.base_pay_semester);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRates {
    /// Monthly base pay for the semester regime (20h/week), in won.
    pub base_pay_semester: i64,
    /// Monthly base pay for the vacation regime (40h/week), in won.
    pub base_pay_vacation: i64,
    /// Semester base pay plus recurring monthly allowances, in won.
    pub semester_monthly_total: i64,
    /// Vacation base pay plus recurring monthly allowances, in won.
    pub vacation_monthly_total: i64,
    /// Semester monthly total divided by the semester monthly-hours basis.
    pub semester_hourly_rate: Decimal,
    /// Vacation monthly total divided by the vacation monthly-hours basis.
    pub vacation_hourly_rate: Decimal,
}

/// The labor cost for a single calendar month of the contract.
///
/// Display amounts (`wage_subtotal`, `annual_allowance_share`,
/// `employer_contribution`) are rounded to whole won; `final_amount` is
/// computed from the unrounded parts and truncated to a multiple of 10 won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyWageLine {
    /// The month of this line.
    pub month: MonthKey,
    /// Semester calendar days.
    pub semester_days: u32,
    /// Vacation calendar days.
    pub vacation_days: u32,
    /// Non-operating calendar days.
    pub non_operating_days: u32,
    /// Work hours after applying the per-category daily hours.
    pub work_hours: Decimal,
    /// Semester plus vacation hourly wages, rounded to won.
    pub wage_subtotal: i64,
    /// This month's share of the annual lump-sum allowances, rounded to won.
    pub annual_allowance_share: i64,
    /// Statutory employer insurance contribution, rounded to won.
    pub employer_contribution: i64,
    /// Payable amount truncated to a multiple of 10 won.
    pub final_amount: i64,
}

/// Totals across all months of the contract.
///
/// `final_amount` is truncated independently from the summed untruncated
/// monthly amounts and is not reconciled with `monthly_final_sum`; the two
/// may differ by a few tens of won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractWageTotals {
    /// Total work hours across all months.
    pub work_hours: Decimal,
    /// Total hourly wages, rounded to won.
    pub wage_subtotal: i64,
    /// Total annual allowance distributed, rounded to won.
    pub annual_allowance_share: i64,
    /// Total employer contribution, rounded to won.
    pub employer_contribution: i64,
    /// Grand total truncated to a multiple of 10 won.
    pub final_amount: i64,
    /// Sum of the per-month truncated final amounts.
    pub monthly_final_sum: i64,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use edupay_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a contract teacher labor-cost calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractWageResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The hourly rates used for every month.
    pub pay_rates: PayRates,
    /// The composite employer contribution rate that was applied.
    pub employer_rate: Decimal,
    /// One line per month, in chronological order.
    pub lines: Vec<MonthlyWageLine>,
    /// Totals across all months.
    pub totals: ContractWageTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
