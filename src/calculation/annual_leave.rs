//! Annual leave (연차) payout calculation.
//!
//! This module covers the whole unused-leave flow:
//!
//! - parsing durations from the NEIS work-status list into minutes and
//!   summarizing them per leave type;
//! - suggesting the number of granted days from service length and
//!   attendance, according to the rule profile's grant type;
//! - deriving the daily ordinary wage from an hourly, daily or monthly wage;
//! - computing the unused-leave payout with the profile's rounding, followed
//!   by a final truncation to 10 won.

use std::collections::BTreeMap;
use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;

use crate::config::LeaveRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    GrantType, LeavePayout, LeavePayoutInput, LeavePayoutResult, LeaveSuggestion,
    LeaveTypeSummary, NiceRecord, RoundingMode, RuleProfile, ServiceInfo, WageInfo, WageType,
};

use super::rounding::{checked_product, floor_to_10, round_won, to_won};

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);
const HOURS_PER_DAY_LIMIT: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Parses NEIS duration text such as `0일 6시간 30분`, `6:30` or `1.5일`.
///
/// # Examples
///
/// ```
/// use edupay_engine::calculation::DurationParser;
/// use rust_decimal::Decimal;
///
/// let parser = DurationParser::new().unwrap();
/// let eight = Decimal::from(8);
/// assert_eq!(parser.to_minutes("0일 6시간 30분", eight), 390);
/// assert_eq!(parser.to_minutes("06:30", eight), 390);
/// assert_eq!(parser.to_minutes("1.5일", eight), 720);
/// assert_eq!(parser.to_minutes("알 수 없음", eight), 0);
/// ```
#[derive(Debug, Clone)]
pub struct DurationParser {
    day_re: Regex,
    hour_re: Regex,
    minute_re: Regex,
}

impl DurationParser {
    /// Compiles the duration patterns.
    pub fn new() -> EngineResult<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| EngineError::CalculationError {
                message: format!("invalid duration pattern: {}", e),
            })
        };
        Ok(Self {
            day_re: compile(r"([0-9]+(?:\.[0-9]+)?)일")?,
            hour_re: compile(r"([0-9]+(?:\.[0-9]+)?)시간")?,
            minute_re: compile(r"([0-9]+)분")?,
        })
    }

    /// Converts duration text into whole minutes.
    ///
    /// Days are converted with `hours_per_day`. Text that cannot be
    /// interpreted, or whose value is too large to represent, yields 0.
    pub fn to_minutes(&self, text: &str, hours_per_day: Decimal) -> i64 {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        self.parse_minutes(&compact, hours_per_day)
            .map(|minutes| to_won(round_won(minutes)))
            .unwrap_or(0)
    }

    fn parse_minutes(&self, compact: &str, hours_per_day: Decimal) -> Option<Decimal> {
        if compact.is_empty() {
            return None;
        }
        let hour_minutes = |hours: Decimal| hours.checked_mul(MINUTES_PER_HOUR);
        let day_minutes = |days: Decimal| days.checked_mul(hours_per_day).and_then(hour_minutes);

        if compact.contains(':') && !compact.contains('일') {
            if let Some((h, m)) = compact.split_once(':') {
                if let (Some(hours), Some(minutes)) = (number_or_zero(h), number_or_zero(m)) {
                    return hour_minutes(hours)?.checked_add(minutes);
                }
            }
        }

        let capture = |re: &Regex| {
            re.captures(compact)
                .and_then(|c| c.get(1))
                .and_then(|m| Decimal::from_str(m.as_str()).ok())
                .unwrap_or(Decimal::ZERO)
        };
        let days = capture(&self.day_re);
        let hours = capture(&self.hour_re);
        let minutes = capture(&self.minute_re);

        if !(days.is_zero() && hours.is_zero() && minutes.is_zero()) {
            return day_minutes(days)?
                .checked_add(hour_minutes(hours)?)?
                .checked_add(minutes);
        }

        // Bare number of days: "2" or ".5일"
        let bare = compact.strip_suffix('일').unwrap_or(compact);
        match Decimal::from_str(bare) {
            Ok(days) if days > Decimal::ZERO => day_minutes(days),
            _ => None,
        }
    }
}

fn number_or_zero(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        Some(Decimal::ZERO)
    } else {
        Decimal::from_str(text).ok()
    }
}

struct RecordGroup {
    count: usize,
    total_minutes: i64,
    hours_per_day: Decimal,
}

/// Sums NEIS records per leave type, sorted by leave type.
///
/// Each group is converted back to days using the hours-per-day of its last
/// record (8 when none is positive).
///
/// # Errors
///
/// - [`EngineError::InvalidInput`] when a record has more than 24 hours per
///   day.
/// - [`EngineError::CalculationError`] if the duration patterns fail to
///   compile.
pub fn summarize_records(records: &[NiceRecord]) -> EngineResult<Vec<LeaveTypeSummary>> {
    let parser = DurationParser::new()?;

    let mut groups: BTreeMap<&str, RecordGroup> = BTreeMap::new();
    for record in records {
        if record.hours_per_day > HOURS_PER_DAY_LIMIT {
            return Err(EngineError::invalid_input(
                "hours_per_day",
                format!("{} hours per day exceeds 24", record.hours_per_day),
            ));
        }
        let minutes = parser.to_minutes(&record.duration, record.hours_per_day);
        let group = groups
            .entry(record.leave_type.as_str())
            .or_insert(RecordGroup {
                count: 0,
                total_minutes: 0,
                hours_per_day: Decimal::from(8),
            });
        group.count += 1;
        group.total_minutes = group.total_minutes.saturating_add(minutes);
        if record.hours_per_day > Decimal::ZERO {
            group.hours_per_day = record.hours_per_day;
        }
    }

    Ok(groups
        .into_iter()
        .map(|(leave_type, group)| summarize_group(leave_type, &group))
        .collect())
}

fn summarize_group(leave_type: &str, group: &RecordGroup) -> LeaveTypeSummary {
    let hours_per_day = group.hours_per_day;
    let total_minutes = Decimal::from(group.total_minutes);
    let minutes_per_day = hours_per_day * MINUTES_PER_HOUR;

    let days = (total_minutes / minutes_per_day).floor();
    let remaining = total_minutes - days * minutes_per_day;
    let hours = (remaining / MINUTES_PER_HOUR).floor();
    let minutes = round_won(remaining - hours * MINUTES_PER_HOUR);

    let total_hours = total_minutes / MINUTES_PER_HOUR;
    let converted_days = total_hours / hours_per_day;
    let whole_days = converted_days.trunc();
    let remaining_hours = ((converted_days - whole_days) * hours_per_day).round_dp(1);

    LeaveTypeSummary {
        leave_type: leave_type.to_string(),
        count: group.count,
        total_minutes: group.total_minutes,
        days_hours_minutes: format!("{}일 {}시간 {}분", days, hours, minutes),
        decimal_hours: total_hours.round_dp(1),
        converted_days_hours: format!("{}일 {}시간", whole_days, one_decimal(remaining_hours)),
    }
}

fn one_decimal(value: Decimal) -> String {
    if value.scale() == 0 {
        format!("{}.0", value)
    } else {
        value.to_string()
    }
}

/// Suggests the number of annual leave days for a rule profile.
///
/// - `manual_days`: no suggestion.
/// - `law_basic`: under one year, one day per month of full attendance (at
///   most 11); attendance below 80%, one day per full month; otherwise 15
///   days plus one day per two years after the first, at most 10 extra.
/// - `cba_like`: under one year as above; attendance of 80% or more, 26 days;
///   otherwise one day per full month.
///
/// # Examples
///
/// ```
/// use edupay_engine::calculation::suggest_annual_days;
/// use edupay_engine::config::LeaveRules;
/// use edupay_engine::models::ServiceInfo;
/// use rust_decimal::Decimal;
///
/// let rules = LeaveRules::default();
/// let service = ServiceInfo {
///     full_years: 5,
///     attendance_rate: Decimal::from(95),
///     full_months: 12,
/// };
/// let suggestion = suggest_annual_days(rules.get("law_basic").unwrap(), &service);
/// assert_eq!(suggestion.suggested_days, Some(17));
/// ```
pub fn suggest_annual_days(rule: &RuleProfile, service: &ServiceInfo) -> LeaveSuggestion {
    let eighty = Decimal::from(80);
    let months = service.full_months;

    match rule.grant_type {
        GrantType::ManualDays => LeaveSuggestion {
            suggested_days: None,
            description: "Leave days are determined separately; enter the granted days directly."
                .to_string(),
        },
        GrantType::LawBasic | GrantType::CbaLike if service.full_years < 1 => {
            let days = months.min(11);
            LeaveSuggestion {
                suggested_days: Some(days),
                description: format!(
                    "{}: under one year, {} months of full attendance -> {} days (at most 11)",
                    rule.name, months, days
                ),
            }
        }
        GrantType::LawBasic if service.attendance_rate < eighty => LeaveSuggestion {
            suggested_days: Some(months),
            description: format!(
                "{}: attendance {}% (below 80%) -> {} full months = {} days",
                rule.name,
                service.attendance_rate.round_dp(1),
                months,
                months
            ),
        },
        GrantType::LawBasic => {
            let extra = ((service.full_years - 1) / 2).min(10);
            let days = 15 + extra;
            LeaveSuggestion {
                suggested_days: Some(days),
                description: format!(
                    "{}: {} years of service, attendance {}% -> 15 + {} = {} days",
                    rule.name,
                    service.full_years,
                    service.attendance_rate.round_dp(1),
                    extra,
                    days
                ),
            }
        }
        GrantType::CbaLike if service.attendance_rate >= eighty => LeaveSuggestion {
            suggested_days: Some(26),
            description: format!(
                "{}: {} years of service, attendance {}% -> 26 days",
                rule.name,
                service.full_years,
                service.attendance_rate.round_dp(1)
            ),
        },
        GrantType::CbaLike => LeaveSuggestion {
            suggested_days: Some(months),
            description: format!(
                "{}: attendance {}% (below 80%) -> {} full months = {} days",
                rule.name,
                service.attendance_rate.round_dp(1),
                months,
                months
            ),
        },
    }
}

/// Derives the daily ordinary wage; non-positive inputs yield zero.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when an hourly wage times the hours
/// per day is too large to calculate.
pub fn daily_wage(wage: &WageInfo) -> EngineResult<Decimal> {
    if wage.wage_amount <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    Ok(match wage.wage_type {
        WageType::Hourly if wage.hours_per_day > Decimal::ZERO => {
            checked_product(wage.wage_amount, wage.hours_per_day, "wage_amount")?
        }
        WageType::Daily => wage.wage_amount,
        WageType::Monthly if wage.monthly_work_days > Decimal::ZERO => {
            wage.wage_amount / wage.monthly_work_days
        }
        _ => Decimal::ZERO,
    })
}

/// Applies the profile's rounding, then truncates to 10 won.
///
/// Non-positive results are reported as zero; amounts beyond the `i64` range
/// saturate.
pub fn apply_leave_rounding(amount: Decimal, rule: &RuleProfile) -> i64 {
    let rounded = if rule.rounding_step <= 1 || rule.rounding_mode == RoundingMode::None {
        amount
    } else {
        let step = Decimal::from(rule.rounding_step);
        let units = amount / step;
        let units = match rule.rounding_mode {
            RoundingMode::Floor => units.floor(),
            RoundingMode::Round => round_won(units),
            RoundingMode::Ceil => units.ceil(),
            RoundingMode::None => units,
        };
        units.checked_mul(step).unwrap_or(Decimal::MAX)
    };

    if rounded <= Decimal::ZERO {
        0
    } else {
        floor_to_10(rounded.trunc())
    }
}

/// Computes the unused annual leave payout.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when `used_days` is negative or the
/// payout is too large to calculate.
pub fn calculate_unused_payout(
    rule: &RuleProfile,
    wage: &WageInfo,
    granted_days: Decimal,
    used_days: Decimal,
) -> EngineResult<LeavePayout> {
    if used_days < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "used_days",
            "used days must not be negative",
        ));
    }
    let granted_days = granted_days.max(Decimal::ZERO);
    let unused_days = (granted_days - used_days).max(Decimal::ZERO);
    let daily = daily_wage(wage)?;
    let payout_raw = checked_product(daily, unused_days, "wage_amount")?;

    Ok(LeavePayout {
        granted_days,
        used_days,
        unused_days,
        daily_wage: daily,
        payout_raw,
        payout: apply_leave_rounding(payout_raw, rule),
        rounding_step: rule.rounding_step,
        rounding_mode: rule.rounding_mode,
    })
}

/// Runs the full annual leave flow: rule lookup, suggestion and payout.
///
/// When `granted_days` is zero or negative and the profile suggests a number
/// of days, the suggestion is used as the granted days.
///
/// # Examples
///
/// ```
/// use edupay_engine::calculation::calculate_leave_payout;
/// use edupay_engine::config::LeaveRules;
/// use edupay_engine::models::{LeavePayoutInput, ServiceInfo, WageInfo, WageType};
/// use rust_decimal::Decimal;
///
/// let input = LeavePayoutInput {
///     rule_id: "law_basic".to_string(),
///     service: ServiceInfo {
///         full_years: 3,
///         attendance_rate: Decimal::from(90),
///         full_months: 12,
///     },
///     wage: WageInfo {
///         wage_type: WageType::Daily,
///         wage_amount: Decimal::from(98_765),
///         ..WageInfo::default()
///     },
///     granted_days: Decimal::ZERO,
///     used_days: Decimal::from(10),
/// };
/// let result = calculate_leave_payout(&input, &LeaveRules::default()).unwrap();
///
/// assert_eq!(result.suggestion.suggested_days, Some(16));
/// assert_eq!(result.payout.unused_days, Decimal::from(6));
/// assert_eq!(result.payout.payout, 592_590);
/// ```
pub fn calculate_leave_payout(
    input: &LeavePayoutInput,
    rules: &LeaveRules,
) -> EngineResult<LeavePayoutResult> {
    let rule = rules
        .get(&input.rule_id)
        .ok_or_else(|| EngineError::InvalidConfig {
            message: format!("no leave rule '{}' and no fallback rule", input.rule_id),
        })?;

    let suggestion = suggest_annual_days(rule, &input.service);

    let granted_days = match suggestion.suggested_days {
        Some(days) if input.granted_days <= Decimal::ZERO => Decimal::from(days),
        _ => input.granted_days,
    };

    let payout = calculate_unused_payout(rule, &input.wage, granted_days, input.used_days)?;

    Ok(LeavePayoutResult {
        rule: rule.clone(),
        suggestion,
        payout,
    })
}
