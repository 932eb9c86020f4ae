//! Monthly labor cost calculation for part-time contract teachers.
//!
//! The calculation runs in two stages:
//!
//! 1. [`derive_pay_rates`] turns the semester and vacation base pay plus the
//!    recurring monthly allowances into one hourly rate per regime. The
//!    monthly hours basis is `weekly hours × 52 / 12` (semester 20h/week,
//!    vacation 40h/week).
//! 2. [`calculate_monthly_wages`] converts each month's day counts into
//!    work hours (Semester and NonOperating 4h/day, Vacation 8h/day), wages,
//!    a pro-rata share of the annual lump-sum allowances, the employer
//!    insurance contribution and a payable amount truncated to 10 won.
//!
//! Every intermediate value is kept as an exact decimal. Only the reported
//! display fields are rounded to whole won; payable amounts are truncated
//! from the unrounded sums.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ContractTeacherRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditWarning, ContractWageTotals, MonthBucket, MonthKey, MonthlyWageLine, PayRates,
};

use super::pay_steps::ResolvedBasePay;
use super::rounding::{checked_product, floor_to_10, round_half_up};

/// A recurring allowance paid every month (e.g. 정액급식비).
///
/// The semester and vacation amounts are added to the respective base pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAllowance {
    /// Allowance name.
    #[serde(default)]
    pub name: String,
    /// Amount added to the semester monthly total, in won.
    #[serde(default)]
    pub semester: i64,
    /// Amount added to the vacation monthly total, in won.
    #[serde(default)]
    pub vacation: i64,
}

/// A lump-sum allowance paid once per contract (e.g. 명절휴가비).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualAllowance {
    /// Allowance name.
    #[serde(default)]
    pub name: String,
    /// Annual amount, in won.
    #[serde(default)]
    pub amount: i64,
}

/// Sums annual lump-sum allowances.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for a negative amount.
pub fn annual_allowance_total(allowances: &[AnnualAllowance]) -> EngineResult<i64> {
    allowances.iter().try_fold(0i64, |total, allowance| {
        if allowance.amount < 0 {
            return Err(EngineError::invalid_input(
                "annual_allowances",
                format!("'{}' must not be negative", allowance.name),
            ));
        }
        Ok(total.saturating_add(allowance.amount))
    })
}

/// The result of pay rate derivation, including the audit step.
#[derive(Debug, Clone)]
pub struct PayRateDerivation {
    /// The derived rates.
    pub pay_rates: PayRates,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Derives the semester and vacation hourly rates.
///
/// `hourly = monthly total × months per year / (weekly hours × weeks per year)`,
/// which equals `monthly total / (weekly hours × 52 / 12)` without the
/// rounding of the intermediate monthly hours.
///
/// # Errors
///
/// - [`EngineError::InvalidInput`] for a negative monthly allowance.
/// - [`EngineError::DegenerateInput`] when a monthly hours basis is zero or
///   negative.
///
/// # Examples
///
/// ```
/// use edupay_engine::calculation::{derive_pay_rates, BasePaySource, ResolvedBasePay};
/// use edupay_engine::config::ContractTeacherRules;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let base_pay = ResolvedBasePay {
///     source: BasePaySource::Step,
///     step: Some(12),
///     standard_monthly: Some(2_455_700),
///     semester: 1_227_850,
///     vacation: 2_455_700,
/// };
/// let result = derive_pay_rates(&base_pay, &[], &ContractTeacherRules::default(), 1).unwrap();
///
/// assert_eq!(result.pay_rates.semester_hourly_rate, Decimal::from_str("14167.5").unwrap());
/// assert_eq!(result.pay_rates.vacation_hourly_rate, Decimal::from_str("14167.5").unwrap());
/// ```
pub fn derive_pay_rates(
    base_pay: &ResolvedBasePay,
    monthly_allowances: &[MonthlyAllowance],
    rules: &ContractTeacherRules,
    step_number: u32,
) -> EngineResult<PayRateDerivation> {
    let mut semester_allowances: i64 = 0;
    let mut vacation_allowances: i64 = 0;
    for allowance in monthly_allowances {
        if allowance.semester < 0 || allowance.vacation < 0 {
            return Err(EngineError::invalid_input(
                "monthly_allowances",
                format!("'{}' must not be negative", allowance.name),
            ));
        }
        semester_allowances = semester_allowances.saturating_add(allowance.semester);
        vacation_allowances = vacation_allowances.saturating_add(allowance.vacation);
    }

    let semester_monthly_total = base_pay.semester.saturating_add(semester_allowances);
    let vacation_monthly_total = base_pay.vacation.saturating_add(vacation_allowances);

    let semester_hourly_rate = hourly_rate(
        semester_monthly_total,
        rules.semester_weekly_hours,
        rules,
        "semester",
    )?;
    let vacation_hourly_rate = hourly_rate(
        vacation_monthly_total,
        rules.vacation_weekly_hours,
        rules,
        "vacation",
    )?;

    let pay_rates = PayRates {
        base_pay_semester: base_pay.semester,
        base_pay_vacation: base_pay.vacation,
        semester_monthly_total,
        vacation_monthly_total,
        semester_hourly_rate,
        vacation_hourly_rate,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "pay_rate_derivation".to_string(),
        rule_name: "Hourly Rate Derivation".to_string(),
        input: serde_json::json!({
            "base_pay_semester": base_pay.semester,
            "base_pay_vacation": base_pay.vacation,
            "semester_allowances": semester_allowances,
            "vacation_allowances": vacation_allowances,
            "semester_weekly_hours": rules.semester_weekly_hours.normalize().to_string(),
            "vacation_weekly_hours": rules.vacation_weekly_hours.normalize().to_string(),
        }),
        output: serde_json::json!({
            "semester_monthly_total": semester_monthly_total,
            "vacation_monthly_total": vacation_monthly_total,
            "semester_hourly_rate": semester_hourly_rate.normalize().to_string(),
            "vacation_hourly_rate": vacation_hourly_rate.normalize().to_string(),
        }),
        reasoning: format!(
            "Semester {} / ({}h x {} / {}) = {}; vacation {} / ({}h x {} / {}) = {}",
            semester_monthly_total,
            rules.semester_weekly_hours.normalize(),
            rules.weeks_per_year.normalize(),
            rules.months_per_year.normalize(),
            semester_hourly_rate.round_dp(4).normalize(),
            vacation_monthly_total,
            rules.vacation_weekly_hours.normalize(),
            rules.weeks_per_year.normalize(),
            rules.months_per_year.normalize(),
            vacation_hourly_rate.round_dp(4).normalize()
        ),
    };

    Ok(PayRateDerivation {
        pay_rates,
        audit_step,
    })
}

fn hourly_rate(
    monthly_total: i64,
    weekly_hours: Decimal,
    rules: &ContractTeacherRules,
    regime: &str,
) -> EngineResult<Decimal> {
    let basis_positive = rules
        .monthly_hours_basis(weekly_hours)
        .is_some_and(|basis| basis > Decimal::ZERO);
    if !basis_positive {
        return Err(EngineError::degenerate(format!(
            "{} monthly hours basis must be greater than zero",
            regime
        )));
    }

    Ok(Decimal::from(monthly_total) * rules.months_per_year
        / (weekly_hours * rules.weeks_per_year))
}

/// Work hours for a month: Semester and NonOperating days at the semester
/// daily hours, Vacation days at the vacation daily hours.
pub fn month_work_hours(bucket: &MonthBucket, rules: &ContractTeacherRules) -> Decimal {
    Decimal::from(bucket.semester_rate_days()) * rules.semester_daily_hours
        + Decimal::from(bucket.vacation_days) * rules.vacation_daily_hours
}

/// Monthly lines, totals and the audit records of a wage calculation.
#[derive(Debug, Clone)]
pub struct MonthlyWageCalculation {
    /// One line per month, in ascending month order.
    pub lines: Vec<MonthlyWageLine>,
    /// Totals across all months.
    pub totals: ContractWageTotals,
    /// One audit step per month followed by the totals step.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings about suspicious month rows.
    pub warnings: Vec<AuditWarning>,
}

/// Converts month rows into wages, allowance shares, employer contributions
/// and payable amounts.
///
/// Month rows may have been edited by the user; rows are sorted by month
/// before calculation. A warning is recorded for a row whose day total
/// exceeds the length of its calendar month, and for a month that appears
/// more than once.
///
/// # Errors
///
/// - [`EngineError::EmptyClassification`] when `months` is empty.
/// - [`EngineError::InvalidInput`] for a negative annual allowance total or
///   employer rate, or for day counts and amounts too large to calculate.
/// - [`EngineError::CalculationError`] when the summed amounts overflow.
/// - [`EngineError::DegenerateInput`] when the total work hours are zero,
///   since the annual allowance cannot be prorated.
pub fn calculate_monthly_wages(
    months: &[MonthBucket],
    pay_rates: &PayRates,
    annual_allowance_total: i64,
    employer_rate: Decimal,
    rules: &ContractTeacherRules,
    step_number: u32,
) -> EngineResult<MonthlyWageCalculation> {
    if months.is_empty() {
        return Err(EngineError::EmptyClassification);
    }
    if annual_allowance_total < 0 {
        return Err(EngineError::invalid_input(
            "annual_allowances",
            "annual allowance total must not be negative",
        ));
    }
    if employer_rate < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "employer_rate",
            "employer contribution rate must not be negative",
        ));
    }

    let mut rows: Vec<MonthBucket> = months.to_vec();
    rows.sort_by_key(|row| row.month);

    let warnings = month_row_warnings(&rows);

    let hours: Vec<Decimal> = rows.iter().map(|row| month_work_hours(row, rules)).collect();
    let total_hours: Decimal = hours.iter().copied().sum();
    if total_hours <= Decimal::ZERO {
        return Err(EngineError::degenerate(
            "total work hours are zero; the annual allowance cannot be prorated",
        ));
    }

    let annual_total = Decimal::from(annual_allowance_total);
    let mut lines = Vec::with_capacity(rows.len());
    let mut audit_steps = Vec::with_capacity(rows.len() + 1);
    let mut step = step_number;

    let mut sum_wages = Decimal::ZERO;
    let mut sum_shares = Decimal::ZERO;
    let mut sum_contributions = Decimal::ZERO;
    let mut sum_raw = Decimal::ZERO;
    let mut monthly_final_sum: i64 = 0;

    for (row, work_hours) in rows.iter().zip(hours) {
        let semester_hours = Decimal::from(row.semester_rate_days()) * rules.semester_daily_hours;
        let vacation_hours = Decimal::from(row.vacation_days) * rules.vacation_daily_hours;

        let semester_wage =
            checked_product(pay_rates.semester_hourly_rate, semester_hours, "semester_days")?;
        let vacation_wage =
            checked_product(pay_rates.vacation_hourly_rate, vacation_hours, "vacation_days")?;
        let wage_subtotal = checked_sum(semester_wage, vacation_wage)?;

        let share = checked_product(annual_total, work_hours, "annual_allowances")? / total_hours;
        let wage_and_share = checked_sum(wage_subtotal, share)?;
        let contribution = checked_product(wage_and_share, employer_rate, "employer_rate")?;
        let raw_amount = checked_sum(wage_and_share, contribution)?;
        let final_amount = floor_to_10(raw_amount);

        audit_steps.push(AuditStep {
            step_number: step,
            rule_id: "monthly_wage".to_string(),
            rule_name: "Monthly Labor Cost".to_string(),
            input: serde_json::json!({
                "month": row.month.to_string(),
                "semester_days": row.semester_days,
                "vacation_days": row.vacation_days,
                "non_operating_days": row.non_operating_days,
            }),
            output: serde_json::json!({
                "work_hours": work_hours.normalize().to_string(),
                "wage_subtotal": wage_subtotal.round_dp(2).normalize().to_string(),
                "annual_allowance_share": share.round_dp(2).normalize().to_string(),
                "employer_contribution": contribution.round_dp(2).normalize().to_string(),
                "final_amount": final_amount,
            }),
            reasoning: format!(
                "{}: {}h semester x {} + {}h vacation x {} = {}; share {} x {}h / {}h = {}; \
                 contribution x {} = {}; floor10 = {}",
                row.month,
                semester_hours.normalize(),
                pay_rates.semester_hourly_rate.round_dp(4).normalize(),
                vacation_hours.normalize(),
                pay_rates.vacation_hourly_rate.round_dp(4).normalize(),
                wage_subtotal.round_dp(2).normalize(),
                annual_allowance_total,
                work_hours.normalize(),
                total_hours.normalize(),
                share.round_dp(2).normalize(),
                employer_rate.normalize(),
                contribution.round_dp(2).normalize(),
                final_amount
            ),
        });
        step += 1;

        lines.push(MonthlyWageLine {
            month: row.month,
            semester_days: row.semester_days,
            vacation_days: row.vacation_days,
            non_operating_days: row.non_operating_days,
            work_hours,
            wage_subtotal: round_half_up(wage_subtotal),
            annual_allowance_share: round_half_up(share),
            employer_contribution: round_half_up(contribution),
            final_amount,
        });

        sum_wages = checked_sum(sum_wages, wage_subtotal)?;
        sum_shares = checked_sum(sum_shares, share)?;
        sum_contributions = checked_sum(sum_contributions, contribution)?;
        sum_raw = checked_sum(sum_raw, raw_amount)?;
        monthly_final_sum = monthly_final_sum.saturating_add(final_amount);
    }

    let totals = ContractWageTotals {
        work_hours: total_hours,
        wage_subtotal: round_half_up(sum_wages),
        annual_allowance_share: round_half_up(sum_shares),
        employer_contribution: round_half_up(sum_contributions),
        final_amount: floor_to_10(sum_raw),
        monthly_final_sum,
    };

    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "contract_totals".to_string(),
        rule_name: "Contract Totals".to_string(),
        input: serde_json::json!({
            "months": lines.len(),
            "untruncated_total": sum_raw.round_dp(2).normalize().to_string(),
        }),
        output: serde_json::json!({
            "final_amount": totals.final_amount,
            "monthly_final_sum": totals.monthly_final_sum,
        }),
        reasoning: format!(
            "floor10({}) = {}; sum of monthly finals = {}",
            sum_raw.round_dp(2).normalize(),
            totals.final_amount,
            totals.monthly_final_sum
        ),
    });

    Ok(MonthlyWageCalculation {
        lines,
        totals,
        audit_steps,
        warnings,
    })
}

fn checked_sum(a: Decimal, b: Decimal) -> EngineResult<Decimal> {
    a.checked_add(b).ok_or_else(|| EngineError::CalculationError {
        message: "labor cost exceeds the representable amount".to_string(),
    })
}

fn month_row_warnings(sorted_rows: &[MonthBucket]) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();
    let mut previous: Option<MonthKey> = None;

    for row in sorted_rows {
        let days_in_month = row.month.days_in_month();
        if row.total_days() > u64::from(days_in_month) {
            warnings.push(AuditWarning {
                code: "DAYS_EXCEED_MONTH".to_string(),
                message: format!(
                    "{} has {} days recorded but only {} calendar days",
                    row.month,
                    row.total_days(),
                    days_in_month
                ),
                severity: "medium".to_string(),
            });
        }
        if previous == Some(row.month) {
            warnings.push(AuditWarning {
                code: "DUPLICATE_MONTH".to_string(),
                message: format!("{} appears more than once in the month table", row.month),
                severity: "medium".to_string(),
            });
        }
        previous = Some(row.month);
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::BasePaySource;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rules() -> ContractTeacherRules {
        ContractTeacherRules::default()
    }

    fn employer_rate() -> Decimal {
        dec("0.112200775")
    }

    fn step_12() -> ResolvedBasePay {
        ResolvedBasePay {
            source: BasePaySource::Step,
            step: Some(12),
            standard_monthly: Some(2_455_700),
            semester: 1_227_850,
            vacation: 2_455_700,
        }
    }

    fn rates() -> PayRates {
        derive_pay_rates(&step_12(), &[], &rules(), 1)
            .unwrap()
            .pay_rates
    }

    fn bucket(month: &str, semester: u32, vacation: u32, non_operating: u32) -> MonthBucket {
        MonthBucket {
            month: month.parse().unwrap(),
            semester_days: semester,
            vacation_days: vacation,
            non_operating_days: non_operating,
        }
    }

    #[test]
    fn test_derive_pay_rates_with_allowances() {
        let allowances = vec![MonthlyAllowance {
            name: "정액급식비".to_string(),
            semester: 70_000,
            vacation: 140_000,
        }];
        let result = derive_pay_rates(&step_12(), &allowances, &rules(), 2).unwrap();

        assert_eq!(result.pay_rates.semester_monthly_total, 1_297_850);
        assert_eq!(result.pay_rates.vacation_monthly_total, 2_595_700);
        // 1,297,850 x 12 / 1,040
        assert_eq!(
            result.pay_rates.semester_hourly_rate.round_dp(4),
            dec("14975.1923")
        );
        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "pay_rate_derivation");
    }

    #[test]
    fn test_negative_monthly_allowance_rejected() {
        let allowances = vec![MonthlyAllowance {
            name: "수당".to_string(),
            semester: -1,
            vacation: 0,
        }];
        let result = derive_pay_rates(&step_12(), &allowances, &rules(), 1);
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_zero_weekly_hours_is_degenerate() {
        let rules = ContractTeacherRules {
            semester_weekly_hours: Decimal::ZERO,
            ..ContractTeacherRules::default()
        };
        let result = derive_pay_rates(&step_12(), &[], &rules, 1);
        assert!(matches!(result, Err(EngineError::DegenerateInput { .. })));
    }

    #[test]
    fn test_single_semester_month() {
        let result = calculate_monthly_wages(
            &[bucket("2025-03", 31, 0, 0)],
            &rates(),
            0,
            employer_rate(),
            &rules(),
            1,
        )
        .unwrap();

        let line = &result.lines[0];
        assert_eq!(line.work_hours, dec("124"));
        assert_eq!(line.wage_subtotal, 1_756_770);
        assert_eq!(line.annual_allowance_share, 0);
        assert_eq!(line.employer_contribution, 197_111);
        // 1,953,880.955... truncated
        assert_eq!(line.final_amount, 1_953_880);
        assert_eq!(result.totals.final_amount, 1_953_880);
        assert_eq!(result.totals.monthly_final_sum, 1_953_880);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_twenty_semester_days_is_eighty_hours() {
        let rates = rates();
        let result = calculate_monthly_wages(
            &[bucket("2025-04", 20, 0, 0)],
            &rates,
            0,
            Decimal::ZERO,
            &rules(),
            1,
        )
        .unwrap();

        let expected = rates.semester_hourly_rate * Decimal::from(80);
        assert_eq!(result.lines[0].work_hours, dec("80"));
        assert_eq!(result.lines[0].wage_subtotal, round_half_up(expected));
    }

    #[test]
    fn test_non_operating_days_paid_at_semester_rate() {
        let rates = rates();
        let result = calculate_monthly_wages(
            &[bucket("2025-08", 0, 17, 5)],
            &rates,
            0,
            Decimal::ZERO,
            &rules(),
            1,
        )
        .unwrap();

        // 5 x 4h semester + 17 x 8h vacation
        assert_eq!(result.lines[0].work_hours, dec("156"));
        let expected =
            rates.semester_hourly_rate * dec("20") + rates.vacation_hourly_rate * dec("136");
        assert_eq!(result.lines[0].wage_subtotal, round_half_up(expected));
    }

    #[test]
    fn test_annual_allowance_prorated_by_hours() {
        let result = calculate_monthly_wages(
            &[bucket("2025-07", 20, 11, 0), bucket("2025-03", 31, 0, 0)],
            &rates(),
            300_000,
            employer_rate(),
            &rules(),
            1,
        )
        .unwrap();

        // Sorted by month; 124h and 168h of 292h
        assert_eq!(result.lines[0].month.to_string(), "2025-03");
        assert_eq!(result.lines[0].annual_allowance_share, 127_397);
        assert_eq!(result.lines[1].annual_allowance_share, 172_603);
        assert_eq!(result.lines[0].final_amount, 2_095_570);
        assert_eq!(result.lines[1].final_amount, 2_839_160);
        assert_eq!(result.totals.annual_allowance_share, 300_000);
        assert_eq!(result.totals.work_hours, dec("292"));
        assert_eq!(result.totals.final_amount, 4_934_730);
        assert_eq!(result.totals.monthly_final_sum, 4_934_730);
    }

    #[test]
    fn test_grand_total_truncated_independently() {
        // Two months of 9 won above a multiple of ten each
        let rates = PayRates {
            base_pay_semester: 0,
            base_pay_vacation: 0,
            semester_monthly_total: 0,
            vacation_monthly_total: 0,
            semester_hourly_rate: dec("2.25"),
            vacation_hourly_rate: dec("2.25"),
        };
        let result = calculate_monthly_wages(
            &[bucket("2025-03", 1, 0, 0), bucket("2025-04", 1, 0, 0)],
            &rates,
            0,
            Decimal::ZERO,
            &rules(),
            1,
        )
        .unwrap();

        assert_eq!(result.lines[0].final_amount, 0);
        assert_eq!(result.lines[1].final_amount, 0);
        assert_eq!(result.totals.monthly_final_sum, 0);
        assert_eq!(result.totals.final_amount, 10);
    }

    #[test]
    fn test_zero_total_hours_is_degenerate() {
        let result = calculate_monthly_wages(
            &[bucket("2025-03", 0, 0, 0)],
            &rates(),
            100_000,
            employer_rate(),
            &rules(),
            1,
        );
        assert!(matches!(result, Err(EngineError::DegenerateInput { .. })));
    }

    #[test]
    fn test_empty_month_table() {
        let result = calculate_monthly_wages(&[], &rates(), 0, employer_rate(), &rules(), 1);
        assert!(matches!(result, Err(EngineError::EmptyClassification)));
    }

    #[test]
    fn test_days_exceeding_month_warns() {
        let result = calculate_monthly_wages(
            &[bucket("2025-02", 20, 10, 0), bucket("2025-02", 1, 0, 0)],
            &rates(),
            0,
            employer_rate(),
            &rules(),
            1,
        )
        .unwrap();

        let codes: Vec<&str> = result.warnings.iter().map(|w| w.code.as_str()).collect();
        assert_eq!(codes, vec!["DAYS_EXCEED_MONTH", "DUPLICATE_MONTH"]);
    }

    #[test]
    fn test_oversized_day_counts_warn_instead_of_overflowing() {
        let result = calculate_monthly_wages(
            &[bucket("2025-03", u32::MAX, 0, 1)],
            &rates(),
            0,
            employer_rate(),
            &rules(),
            1,
        )
        .unwrap();

        let line = &result.lines[0];
        assert_eq!(line.work_hours, Decimal::from(4 * (u64::from(u32::MAX) + 1)));
        assert_eq!(line.final_amount % 10, 0);
        assert!(line.final_amount > 0);
        assert_eq!(result.warnings[0].code, "DAYS_EXCEED_MONTH");
    }

    #[test]
    fn test_audit_steps_numbered_sequentially() {
        let result = calculate_monthly_wages(
            &[bucket("2025-03", 31, 0, 0), bucket("2025-04", 30, 0, 0)],
            &rates(),
            0,
            employer_rate(),
            &rules(),
            5,
        )
        .unwrap();

        let numbers: Vec<u32> = result.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![5, 6, 7]);
        assert_eq!(result.audit_steps[2].rule_id, "contract_totals");
    }

    #[test]
    fn test_annual_allowance_total() {
        let allowances = vec![
            AnnualAllowance {
                name: "명절휴가비".to_string(),
                amount: 200_000,
            },
            AnnualAllowance {
                name: "맞춤형복지".to_string(),
                amount: 100_000,
            },
        ];
        assert_eq!(annual_allowance_total(&allowances).unwrap(), 300_000);
        assert_eq!(annual_allowance_total(&[]).unwrap(), 0);

        let negative = vec![AnnualAllowance {
            name: "x".to_string(),
            amount: -5,
        }];
        assert!(annual_allowance_total(&negative).is_err());
    }
}
