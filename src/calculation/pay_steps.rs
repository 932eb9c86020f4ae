//! Base pay resolution from the step (호봉) schedule.
//!
//! The schedule lists the standard monthly base pay for a full-time
//! (8h/day, 40h/week) position. Part-time contract teachers work 20h/week
//! during the semester and 40h/week during vacation, so the semester base
//! pay is the standard amount scaled by the semester pay ratio and the
//! vacation base pay is the standard amount itself.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{ContractTeacherRules, PayStepTable};
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

use super::rounding::round_half_up;

/// Base pay for one step under both working regimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepBasePay {
    /// Step number, 1-40.
    pub step: u32,
    /// Standard monthly base pay (8h/day), in won.
    pub standard_monthly: i64,
    /// Semester (20h/week) base pay, in won.
    pub semester: i64,
    /// Vacation (40h/week) base pay, in won.
    pub vacation: i64,
}

/// Looks up a step and derives the semester and vacation base pay.
///
/// # Examples
///
/// ```
/// use edupay_engine::calculation::base_pay_from_step;
/// use edupay_engine::config::{ContractTeacherRules, PayStepTable};
///
/// let pay = base_pay_from_step(&PayStepTable::standard(), &ContractTeacherRules::default(), 1)
///     .unwrap();
/// assert_eq!(pay.semester, 957_550);
/// assert_eq!(pay.vacation, 1_915_100);
/// ```
pub fn base_pay_from_step(
    table: &PayStepTable,
    rules: &ContractTeacherRules,
    step: u32,
) -> EngineResult<StepBasePay> {
    let standard_monthly = table.standard_monthly(step)?;
    Ok(StepBasePay {
        step,
        standard_monthly,
        semester: semester_base_pay(standard_monthly, rules),
        vacation: standard_monthly,
    })
}

fn semester_base_pay(standard_monthly: i64, rules: &ContractTeacherRules) -> i64 {
    round_half_up(Decimal::from(standard_monthly) * rules.semester_pay_ratio)
}

/// How the base pay of a contract is specified.
///
/// Resolution order: `step` from the schedule, else `standard_monthly`.
/// The semester and vacation amounts derived from either may be replaced by
/// explicit overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePayInput {
    /// Step (호봉) to look up in the schedule.
    #[serde(default)]
    pub step: Option<u32>,
    /// Standard monthly base pay entered directly, in won.
    #[serde(default)]
    pub standard_monthly: Option<i64>,
    /// Manually entered semester base pay, in won.
    #[serde(default)]
    pub semester_override: Option<i64>,
    /// Manually entered vacation base pay, in won.
    #[serde(default)]
    pub vacation_override: Option<i64>,
}

/// Where a resolved base pay came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasePaySource {
    /// Looked up from the step schedule.
    Step,
    /// Entered as a standard monthly amount.
    StandardMonthly,
    /// Semester and vacation amounts both entered manually.
    Manual,
}

/// Resolved base pay amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedBasePay {
    /// How the amounts were resolved.
    pub source: BasePaySource,
    /// Step, when resolved from the schedule.
    pub step: Option<u32>,
    /// Standard monthly base pay, when known.
    pub standard_monthly: Option<i64>,
    /// Semester base pay, in won.
    pub semester: i64,
    /// Vacation base pay, in won.
    pub vacation: i64,
}

/// The result of base pay resolution, including the audit step.
#[derive(Debug, Clone)]
pub struct BasePayResolution {
    /// The resolved amounts.
    pub base_pay: ResolvedBasePay,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves a [`BasePayInput`] into semester and vacation base pay.
///
/// # Errors
///
/// - [`EngineError::StepNotFound`] when `step` is outside 1-40.
/// - [`EngineError::InvalidInput`] when the standard, semester or vacation
///   amount cannot be determined or is not positive.
pub fn resolve_base_pay(
    input: &BasePayInput,
    table: &PayStepTable,
    rules: &ContractTeacherRules,
    step_number: u32,
) -> EngineResult<BasePayResolution> {
    let (source, standard_monthly, derived) = match (input.step, input.standard_monthly) {
        (Some(step), _) => {
            let pay = base_pay_from_step(table, rules, step)?;
            (
                BasePaySource::Step,
                Some(pay.standard_monthly),
                Some((pay.semester, pay.vacation)),
            )
        }
        (None, Some(standard)) => {
            if standard <= 0 {
                return Err(EngineError::invalid_input(
                    "standard_monthly",
                    "standard monthly base pay must be greater than zero",
                ));
            }
            (
                BasePaySource::StandardMonthly,
                Some(standard),
                Some((semester_base_pay(standard, rules), standard)),
            )
        }
        (None, None) => (BasePaySource::Manual, None, None),
    };

    let semester = input
        .semester_override
        .or(derived.map(|(semester, _)| semester))
        .unwrap_or(0);
    let vacation = input
        .vacation_override
        .or(derived.map(|(_, vacation)| vacation))
        .unwrap_or(0);

    if semester <= 0 {
        return Err(EngineError::invalid_input(
            "base_pay.semester",
            "semester base pay is missing; enter a step, a standard amount or the base pay",
        ));
    }
    if vacation <= 0 {
        return Err(EngineError::invalid_input(
            "base_pay.vacation",
            "vacation base pay is missing; enter a step, a standard amount or the base pay",
        ));
    }

    let base_pay = ResolvedBasePay {
        source,
        step: input.step,
        standard_monthly,
        semester,
        vacation,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_pay_resolution".to_string(),
        rule_name: "Base Pay Resolution".to_string(),
        input: serde_json::json!({
            "step": input.step,
            "standard_monthly": input.standard_monthly,
            "semester_override": input.semester_override,
            "vacation_override": input.vacation_override,
        }),
        output: serde_json::json!({
            "source": source,
            "semester": semester,
            "vacation": vacation,
        }),
        reasoning: match (source, standard_monthly) {
            (BasePaySource::Manual, _) | (_, None) => format!(
                "Manual base pay: semester {} won, vacation {} won",
                semester, vacation
            ),
            (_, Some(standard)) => format!(
                "Standard {} won x {} = semester {} won; vacation {} won",
                standard,
                rules.semester_pay_ratio.normalize(),
                semester,
                vacation
            ),
        },
    };

    Ok(BasePayResolution {
        base_pay,
        audit_step,
    })
}
