//! End-to-end pipeline for the contract teacher labor-cost calculator.
//!
//! [`build_month_table`] turns a contract period and override intervals into
//! the editable month table; [`calculate_contract_wages`] turns a (possibly
//! edited) month table into a [`ContractWageResult`]. [`calculate_contract_teacher`]
//! runs both in one call.

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, ContractPeriod, ContractWageResult, DayCategory, MonthBucket,
    OverrideInterval, lenient_date,
};

use super::contract_wages::{
    AnnualAllowance, MonthlyAllowance, annual_allowance_total, calculate_monthly_wages,
    derive_pay_rates,
};
use super::day_classification::classify_days;
use super::employer_insurance::employer_contribution_rate;
use super::monthly_aggregation::aggregate_by_month;
use super::pay_steps::{BasePayInput, resolve_base_pay};

/// Contract period and override intervals.
///
/// Contract dates that are blank or not `YYYY-MM-DD` read as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTableInput {
    /// First day of the contract.
    #[serde(default, deserialize_with = "lenient_date")]
    pub contract_start: Option<NaiveDate>,
    /// Last day of the contract.
    #[serde(default, deserialize_with = "lenient_date")]
    pub contract_end: Option<NaiveDate>,
    /// Vacation intervals, applied in order.
    #[serde(default)]
    pub vacations: Vec<OverrideInterval>,
    /// Non-operating intervals, applied after the vacation intervals.
    #[serde(default)]
    pub non_operating: Vec<OverrideInterval>,
}

/// The month table derived from a contract period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTable {
    /// The validated contract period.
    pub period: ContractPeriod,
    /// Number of classified calendar days.
    pub total_days: usize,
    /// Days classified as Semester.
    pub semester_days: usize,
    /// Days classified as Vacation.
    pub vacation_days: usize,
    /// Days classified as NonOperating.
    pub non_operating_days: usize,
    /// One row per calendar month, ascending.
    pub months: Vec<MonthBucket>,
}

/// Validates the contract period, classifies every date and aggregates the
/// result by month.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when a contract date is missing or
/// the end date is before the start date.
///
/// # Examples
///
/// ```
/// use edupay_engine::calculation::{build_month_table, MonthTableInput};
/// use chrono::NaiveDate;
///
/// let input = MonthTableInput {
///     contract_start: NaiveDate::from_ymd_opt(2025, 3, 1),
///     contract_end: NaiveDate::from_ymd_opt(2025, 3, 31),
///     ..MonthTableInput::default()
/// };
/// let table = build_month_table(&input).unwrap();
/// assert_eq!(table.months.len(), 1);
/// assert_eq!(table.semester_days, 31);
/// ```
pub fn build_month_table(input: &MonthTableInput) -> EngineResult<MonthTable> {
    let period = validate_period(input.contract_start, input.contract_end)?;
    let days = classify_days(&period, &input.vacations, &input.non_operating);
    let months = aggregate_by_month(&days)?;

    Ok(MonthTable {
        period,
        total_days: days.len(),
        semester_days: days.count(DayCategory::Semester),
        vacation_days: days.count(DayCategory::Vacation),
        non_operating_days: days.count(DayCategory::NonOperating),
        months,
    })
}

fn validate_period(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> EngineResult<ContractPeriod> {
    let start = start.ok_or_else(|| {
        EngineError::invalid_input(
            "contract_start",
            "contract start date is required as YYYY-MM-DD",
        )
    })?;
    let end = end.ok_or_else(|| {
        EngineError::invalid_input("contract_end", "contract end date is required as YYYY-MM-DD")
    })?;

    let period = ContractPeriod { start, end };
    if !period.is_valid() {
        return Err(EngineError::invalid_input(
            "contract_end",
            format!("contract end {} is before contract start {}", end, start),
        ));
    }
    Ok(period)
}

/// Base pay, allowances and the month table to price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageInput {
    /// How the base pay is specified.
    #[serde(default)]
    pub base_pay: BasePayInput,
    /// Recurring monthly allowances.
    #[serde(default)]
    pub monthly_allowances: Vec<MonthlyAllowance>,
    /// Annual lump-sum allowances.
    #[serde(default)]
    pub annual_allowances: Vec<AnnualAllowance>,
    /// Month rows, as produced by [`build_month_table`] or edited by the user.
    #[serde(default)]
    pub months: Vec<MonthBucket>,
}

/// Prices a month table.
///
/// Steps recorded in the audit trace, in order: base pay resolution, hourly
/// rate derivation, employer rate, one step per month, contract totals.
///
/// # Errors
///
/// Propagates base pay, rate derivation and monthly wage errors.
pub fn calculate_contract_wages(
    input: &WageInput,
    config: &ConfigLoader,
) -> EngineResult<ContractWageResult> {
    let start_time = Instant::now();
    let rules = config.contract_teacher();
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    let base_pay = resolve_base_pay(
        &input.base_pay,
        config.config().pay_steps(),
        rules,
        step_number,
    )?;
    audit_steps.push(base_pay.audit_step);
    step_number += 1;

    let derivation = derive_pay_rates(
        &base_pay.base_pay,
        &input.monthly_allowances,
        rules,
        step_number,
    )?;
    audit_steps.push(derivation.audit_step);
    step_number += 1;

    debug!(
        semester_hourly_rate = %derivation.pay_rates.semester_hourly_rate.round_dp(4),
        vacation_hourly_rate = %derivation.pay_rates.vacation_hourly_rate.round_dp(4),
        "Derived hourly rates"
    );

    let employer = employer_contribution_rate(&rules.insurance, step_number);
    audit_steps.push(employer.audit_step);
    step_number += 1;

    let annual_total = annual_allowance_total(&input.annual_allowances)?;

    let wages = calculate_monthly_wages(
        &input.months,
        &derivation.pay_rates,
        annual_total,
        employer.rate,
        rules,
        step_number,
    )?;
    audit_steps.extend(wages.audit_steps);

    Ok(ContractWageResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        pay_rates: derivation.pay_rates,
        employer_rate: employer.rate,
        lines: wages.lines,
        totals: wages.totals,
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings: wages.warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}

/// Contract period, overrides, base pay and allowances in one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTeacherInput {
    /// Contract period and override intervals.
    #[serde(flatten)]
    pub table: MonthTableInput,
    /// How the base pay is specified.
    #[serde(default)]
    pub base_pay: BasePayInput,
    /// Recurring monthly allowances.
    #[serde(default)]
    pub monthly_allowances: Vec<MonthlyAllowance>,
    /// Annual lump-sum allowances.
    #[serde(default)]
    pub annual_allowances: Vec<AnnualAllowance>,
}

/// The month table and the wage result computed from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTeacherResult {
    /// The month table.
    pub month_table: MonthTable,
    /// The wage calculation.
    pub wages: ContractWageResult,
}

/// Builds the month table and prices it without user edits.
pub fn calculate_contract_teacher(
    input: &ContractTeacherInput,
    config: &ConfigLoader,
) -> EngineResult<ContractTeacherResult> {
    let month_table = build_month_table(&input.table)?;
    let wage_input = WageInput {
        base_pay: input.base_pay.clone(),
        monthly_allowances: input.monthly_allowances.clone(),
        annual_allowances: input.annual_allowances.clone(),
        months: month_table.months.clone(),
    };
    let wages = calculate_contract_wages(&wage_input, config)?;

    Ok(ContractTeacherResult { month_table, wages })
}
