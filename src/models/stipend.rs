//! Stipend models for vacation group training and weekend online education.
//!
//! Both calculators consume an [`OrdinaryWageSnapshot`] produced by the
//! external ordinary-wage module; this crate never computes the ordinary wage
//! itself.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Values handed over by the external ordinary-wage (통상임금) module.
///
/// # Example
///
/// ```
/// use edupay_engine::models::OrdinaryWageSnapshot;
/// use rust_decimal::Decimal;
///
/// let snapshot = OrdinaryWageSnapshot {
///     job: "조리사".to_string(),
///     base_pay: 2_184_000,
///     meal_allowance: 150_000,
///     hourly_ordinary_wage: Decimal::new(13_240, 0),
/// };
/// assert_eq!(snapshot.base_pay + snapshot.meal_allowance, 2_334_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdinaryWageSnapshot {
    /// Job name the snapshot was computed for.
    #[serde(default)]
    pub job: String,
    /// Monthly base pay (기본급), in won.
    #[serde(default)]
    pub base_pay: i64,
    /// Fixed meal allowance (정액급식비), in won.
    #[serde(default)]
    pub meal_allowance: i64,
    /// Ordinary hourly wage, in won.
    #[serde(default)]
    pub hourly_ordinary_wage: Decimal,
}

/// Inputs for the vacation group-training stipend.
///
/// When `basic_pay` or `meal_allowance` are omitted they are taken from the
/// snapshot. Omitted days, hours and minimum wage fall back to configured
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationTrainingInput {
    /// Monthly base pay override, in won.
    #[serde(default)]
    pub basic_pay: Option<i64>,
    /// Meal allowance override, in won.
    #[serde(default)]
    pub meal_allowance: Option<i64>,
    /// Calendar days in the training month.
    #[serde(default)]
    pub calendar_days: Option<u32>,
    /// Hours of training attended.
    #[serde(default)]
    pub training_hours: Option<Decimal>,
    /// Statutory minimum hourly wage, in won.
    #[serde(default)]
    pub minimum_hourly_wage: Option<i64>,
    /// Snapshot from the ordinary-wage module (auto mode).
    #[serde(default)]
    pub snapshot: Option<OrdinaryWageSnapshot>,
}

/// Breakdown of the vacation group-training stipend.
///
/// Every intermediate amount is truncated to a multiple of 10 won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationTrainingResult {
    /// Base pay plus meal allowance.
    pub monthly_wage: i64,
    /// Monthly wage divided by calendar days.
    pub daily_wage: i64,
    /// Daily wage divided by 8 hours.
    pub hourly_wage: i64,
    /// Hourly wage multiplied by training hours.
    pub training_pay: i64,
    /// Minimum hourly wage multiplied by training hours.
    pub minimum_wage_pay: i64,
    /// Amount added so the stipend reaches the minimum wage.
    pub minimum_wage_top_up: i64,
    /// The payable stipend.
    pub final_pay: i64,
    /// Calendar days used.
    pub calendar_days: u32,
    /// Training hours used.
    pub training_hours: Decimal,
}

/// Inputs for the weekend online-education stipend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendEducationInput {
    /// When true, `manual_hourly_wage` is used instead of the snapshot.
    #[serde(default)]
    pub use_manual_hourly: bool,
    /// Manually entered base hourly wage, in won.
    #[serde(default)]
    pub manual_hourly_wage: Option<Decimal>,
    /// Overtime multiplier (defaults to 1.5).
    #[serde(default)]
    pub multiplier: Option<Decimal>,
    /// Education hours (defaults to 6).
    #[serde(default)]
    pub education_hours: Option<Decimal>,
    /// Snapshot from the ordinary-wage module.
    #[serde(default)]
    pub snapshot: Option<OrdinaryWageSnapshot>,
}

/// Whether the weekend education stipend could be computed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StipendStatus {
    /// All inputs were present and the amount was computed.
    Computed,
    /// Base wage, multiplier or hours is still zero.
    Pending,
}

/// Result of the weekend online-education stipend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendEducationResult {
    /// Computed or pending.
    pub status: StipendStatus,
    /// The base hourly wage that was used.
    pub base_hourly_wage: Decimal,
    /// Base hourly wage times multiplier, truncated to 10 won.
    pub overtime_hourly_wage: Option<i64>,
    /// Overtime hourly wage times hours, truncated to 10 won.
    pub amount: i64,
}
