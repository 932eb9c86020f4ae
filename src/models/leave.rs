//! Annual leave (연차) models: rule profiles, NEIS work-status records and
//! unused-leave payout results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which annual-leave granting logic a rule profile follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    /// Simplified Labor Standards Act rules.
    LawBasic,
    /// Collective-bargaining-agreement style grant.
    CbaLike,
    /// Days are computed elsewhere and entered manually.
    ManualDays,
}

/// How a payout is rounded to the rule's step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round down.
    #[default]
    Floor,
    /// Round half away from zero.
    Round,
    /// Round up.
    Ceil,
    /// Leave the amount unchanged.
    None,
}

/// A named set of annual-leave rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleProfile {
    /// Internal key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Granting logic.
    pub grant_type: GrantType,
    /// Rounding step in won.
    #[serde(default = "default_rounding_step")]
    pub rounding_step: i64,
    /// Rounding mode.
    #[serde(default)]
    pub rounding_mode: RoundingMode,
    /// Description shown to the user.
    #[serde(default)]
    pub description: String,
}

fn default_rounding_step() -> i64 {
    10
}

/// One row of the NEIS work-status list (근무상황목록).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NiceRecord {
    /// Leave type (연가, 병가, 공가, ...).
    pub leave_type: String,
    /// Raw duration text such as `0일 6시간 30분`, `6:30` or `1.5일`.
    #[serde(default)]
    pub duration: String,
    /// Contractual hours per day used to convert days to minutes.
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: Decimal,
}

fn default_hours_per_day() -> Decimal {
    Decimal::from(8)
}

/// Per-leave-type totals of a set of [`NiceRecord`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveTypeSummary {
    /// Leave type.
    pub leave_type: String,
    /// Number of records.
    pub count: usize,
    /// Total minutes across records.
    pub total_minutes: i64,
    /// Rendered as `D일 H시간 M분`.
    pub days_hours_minutes: String,
    /// Total hours, one decimal place.
    pub decimal_hours: Decimal,
    /// Rendered as `D일 H.H시간` against the hours-per-day basis.
    pub converted_days_hours: String,
}

/// Attendance summary used to suggest the number of granted days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Completed years of service.
    #[serde(default)]
    pub full_years: u32,
    /// Attendance rate in percent.
    #[serde(default)]
    pub attendance_rate: Decimal,
    /// Months with perfect attendance.
    #[serde(default)]
    pub full_months: u32,
}

/// How the wage amount is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WageType {
    /// Hourly wage.
    Hourly,
    /// Daily wage.
    Daily,
    /// Monthly wage.
    #[default]
    Monthly,
}

/// Wage information used to derive the daily ordinary wage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageInfo {
    /// How `wage_amount` is expressed.
    #[serde(default)]
    pub wage_type: WageType,
    /// The wage amount in won.
    #[serde(default)]
    pub wage_amount: Decimal,
    /// Hours per day, used for hourly wages.
    #[serde(default)]
    pub hours_per_day: Decimal,
    /// Working days per month, used for monthly wages.
    #[serde(default)]
    pub monthly_work_days: Decimal,
}

/// Suggested number of annual leave days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSuggestion {
    /// Suggested days, absent for manual rule profiles.
    pub suggested_days: Option<u32>,
    /// Explanation of how the suggestion was derived.
    pub description: String,
}

/// Unused annual leave payout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePayout {
    /// Granted days.
    pub granted_days: Decimal,
    /// Used days.
    pub used_days: Decimal,
    /// Unused days, never negative.
    pub unused_days: Decimal,
    /// Daily ordinary wage before rounding.
    pub daily_wage: Decimal,
    /// Daily wage times unused days.
    pub payout_raw: Decimal,
    /// Payout after rule rounding and the final 10-won truncation.
    pub payout: i64,
    /// Rounding step of the rule.
    pub rounding_step: i64,
    /// Rounding mode of the rule.
    pub rounding_mode: RoundingMode,
}

/// Request for the full annual leave pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePayoutInput {
    /// Rule profile id; unknown ids fall back to `law_basic`.
    #[serde(default)]
    pub rule_id: String,
    /// Attendance summary.
    #[serde(default)]
    pub service: ServiceInfo,
    /// Wage information.
    #[serde(default)]
    pub wage: WageInfo,
    /// Granted days; zero means "use the suggestion".
    #[serde(default)]
    pub granted_days: Decimal,
    /// Used days.
    #[serde(default)]
    pub used_days: Decimal,
}

/// Result of the full annual leave pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePayoutResult {
    /// The rule profile that was applied.
    pub rule: RuleProfile,
    /// The suggested number of days.
    pub suggestion: LeaveSuggestion,
    /// The payout.
    pub payout: LeavePayout,
}
