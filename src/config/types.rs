//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every rule structure also
//! implements [`Default`] with the currently published values, so the
//! calculators can be used without a configuration directory.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{GrantType, RoundingMode, RuleProfile};

/// Number of steps (호봉) in the base pay schedule.
pub const PAY_STEP_COUNT: usize = 40;

/// Standard monthly base pay (8h/day) by step, 2025 schedule.
const STANDARD_PAY_STEPS: [i64; PAY_STEP_COUNT] = [
    1_915_100, 1_973_100, 2_031_900, 2_090_500, 2_149_600, 2_208_600, 2_267_000, 2_325_100,
    2_365_500, 2_387_800, 2_408_300, 2_455_700, 2_567_600, 2_679_900, 2_792_000, 2_904_500,
    3_015_500, 3_131_900, 3_247_500, 3_363_300, 3_478_900, 3_607_300, 3_734_600, 3_862_300,
    3_989_800, 4_117_800, 4_251_300, 4_384_500, 4_523_800, 4_663_600, 4_803_000, 4_942_200,
    5_083_700, 5_224_600, 5_365_800, 5_506_400, 5_628_700, 5_751_200, 5_873_900, 5_995_800,
];

/// Metadata about the rule set.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Short identifier of the rule set.
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Version or effective date of the rule set.
    pub version: String,
    /// Where the rules were taken from.
    #[serde(default)]
    pub source: String,
}

impl Default for EngineMetadata {
    fn default() -> Self {
        Self {
            code: "edupay".to_string(),
            name: "Education Office Administrative Pay Rules".to_string(),
            version: "2025-03-01".to_string(),
            source: String::new(),
        }
    }
}

/// One entry of the pay step file.
#[derive(Debug, Clone, Deserialize)]
pub struct PayStepEntry {
    /// Step number, 1-40.
    pub step: u32,
    /// Standard monthly base pay (8h/day), in won.
    pub monthly: i64,
}

/// Pay step file structure (`pay_steps.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PayStepsFile {
    /// Date from which the schedule applies.
    pub effective_date: NaiveDate,
    /// The schedule entries.
    pub steps: Vec<PayStepEntry>,
}

/// The validated, immutable 40-entry base pay schedule.
///
/// # Example
///
/// ```
/// use edupay_engine::config::PayStepTable;
///
/// let table = PayStepTable::standard();
/// assert_eq!(table.standard_monthly(1).unwrap(), 1_915_100);
/// assert!(table.standard_monthly(41).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayStepTable {
    effective_date: NaiveDate,
    amounts: [i64; PAY_STEP_COUNT],
}

impl PayStepTable {
    /// Builds a table from file entries.
    ///
    /// Entries may be listed in any order but must cover steps 1 through 40
    /// exactly once with positive amounts.
    pub fn new(effective_date: NaiveDate, entries: &[PayStepEntry]) -> EngineResult<Self> {
        if entries.len() != PAY_STEP_COUNT {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "pay step table must have {} entries, found {}",
                    PAY_STEP_COUNT,
                    entries.len()
                ),
            });
        }

        let mut amounts = [0i64; PAY_STEP_COUNT];
        for entry in entries {
            if entry.step == 0 || entry.step as usize > PAY_STEP_COUNT {
                return Err(EngineError::InvalidConfig {
                    message: format!("pay step {} is outside 1-{}", entry.step, PAY_STEP_COUNT),
                });
            }
            if entry.monthly <= 0 {
                return Err(EngineError::InvalidConfig {
                    message: format!("pay step {} has non-positive amount", entry.step),
                });
            }
            let slot = &mut amounts[entry.step as usize - 1];
            if *slot != 0 {
                return Err(EngineError::InvalidConfig {
                    message: format!("pay step {} is listed twice", entry.step),
                });
            }
            *slot = entry.monthly;
        }

        Ok(Self {
            effective_date,
            amounts,
        })
    }

    /// The built-in 2025 schedule.
    pub fn standard() -> Self {
        Self {
            effective_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            amounts: STANDARD_PAY_STEPS,
        }
    }

    /// Date from which the schedule applies.
    pub fn effective_date(&self) -> NaiveDate {
        self.effective_date
    }

    /// Standard monthly base pay (8h/day, 40h/week) for a step.
    pub fn standard_monthly(&self, step: u32) -> EngineResult<i64> {
        step.checked_sub(1)
            .and_then(|index| self.amounts.get(index as usize))
            .copied()
            .ok_or(EngineError::StepNotFound { step })
    }
}

impl Default for PayStepTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Statutory employer insurance rates.
///
/// Long-term care insurance is levied as a share of the health insurance
/// contribution rather than of wages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployerInsuranceRates {
    /// Health insurance (건강보험).
    pub health: Decimal,
    /// National pension (국민연금).
    pub pension: Decimal,
    /// Employment insurance (고용보험).
    pub employment: Decimal,
    /// Industrial accident insurance (산재보험).
    pub industrial_accident: Decimal,
    /// Long-term care as a share of the health rate (장기요양).
    pub long_term_care_of_health: Decimal,
}

impl EmployerInsuranceRates {
    /// Long-term care rate expressed against wages.
    pub fn long_term_care(&self) -> Decimal {
        self.health * self.long_term_care_of_health
    }

    /// Sum of all components.
    pub fn composite_rate(&self) -> Decimal {
        self.health + self.pension + self.employment + self.industrial_accident
            + self.long_term_care()
    }
}

impl Default for EmployerInsuranceRates {
    fn default() -> Self {
        Self {
            health: Decimal::new(3545, 5),
            pension: Decimal::new(45, 3),
            employment: Decimal::new(175, 4),
            industrial_accident: Decimal::new(966, 5),
            long_term_care_of_health: Decimal::new(1295, 4),
        }
    }
}

/// Working-time rules for part-time contract teachers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContractTeacherRules {
    /// Contractual weekly hours during the semester.
    pub semester_weekly_hours: Decimal,
    /// Contractual weekly hours during vacation.
    pub vacation_weekly_hours: Decimal,
    /// Daily hours credited for semester and non-operating days.
    pub semester_daily_hours: Decimal,
    /// Daily hours credited for vacation days.
    pub vacation_daily_hours: Decimal,
    /// Weeks per year used for the week-to-month conversion.
    pub weeks_per_year: Decimal,
    /// Months per year used for the week-to-month conversion.
    pub months_per_year: Decimal,
    /// Semester base pay as a share of the standard base pay.
    pub semester_pay_ratio: Decimal,
    /// Employer insurance rates.
    pub insurance: EmployerInsuranceRates,
}

impl ContractTeacherRules {
    /// Weekly hours converted to a monthly basis (`weekly × 52 / 12`).
    pub fn monthly_hours_basis(&self, weekly_hours: Decimal) -> Option<Decimal> {
        if self.months_per_year.is_zero() {
            return None;
        }
        Some(weekly_hours * self.weeks_per_year / self.months_per_year)
    }
}

impl Default for ContractTeacherRules {
    fn default() -> Self {
        Self {
            semester_weekly_hours: Decimal::from(20),
            vacation_weekly_hours: Decimal::from(40),
            semester_daily_hours: Decimal::from(4),
            vacation_daily_hours: Decimal::from(8),
            weeks_per_year: Decimal::from(52),
            months_per_year: Decimal::from(12),
            semester_pay_ratio: Decimal::new(5, 1),
            insurance: EmployerInsuranceRates::default(),
        }
    }
}

/// Defaults for the stipend calculators.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StipendDefaults {
    /// Calendar days in the training month.
    pub calendar_days: u32,
    /// Training hours for vacation group training.
    pub training_hours: Decimal,
    /// Statutory minimum hourly wage, in won.
    pub minimum_hourly_wage: i64,
    /// Hours per day used to convert a daily wage to hourly.
    pub hours_per_day: Decimal,
    /// Overtime multiplier for weekend education.
    pub weekend_multiplier: Decimal,
    /// Hours of weekend education.
    pub weekend_hours: Decimal,
}

impl Default for StipendDefaults {
    fn default() -> Self {
        Self {
            calendar_days: 31,
            training_hours: Decimal::from(6),
            minimum_hourly_wage: 10_030,
            hours_per_day: Decimal::from(8),
            weekend_multiplier: Decimal::new(15, 1),
            weekend_hours: Decimal::from(6),
        }
    }
}

/// Unit prices for local (관내) trips.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocalTravelRates {
    /// Round-trip distance at or below which actual expenses apply.
    pub short_distance_km: Decimal,
    /// Trips shorter than this many hours are half-day trips.
    pub half_day_hours: Decimal,
    /// Half-day flat rate.
    pub half_day: i64,
    /// Full-day flat rate.
    pub full_day: i64,
    /// Deduction when an official vehicle was used.
    pub vehicle_deduction: i64,
}

impl Default for LocalTravelRates {
    fn default() -> Self {
        Self {
            short_distance_km: Decimal::from(2),
            half_day_hours: Decimal::from(4),
            half_day: 10_000,
            full_day: 20_000,
            vehicle_deduction: 10_000,
        }
    }
}

/// Unit prices for long-distance (관외) trips.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LongDistanceTravelRates {
    /// Daily per diem (일비).
    pub per_diem: i64,
    /// Daily meal allowance (식비).
    pub meal: i64,
    /// Share of the per diem paid on official-vehicle days.
    pub vehicle_day_ratio: Decimal,
    /// Nightly lodging cap in Seoul.
    pub lodging_seoul: i64,
    /// Nightly lodging cap in metropolitan cities.
    pub lodging_metro: i64,
    /// Nightly lodging cap elsewhere.
    pub lodging_other: i64,
    /// Multiplier applied to the lodging cap for unavoidable circumstances.
    pub lodging_surcharge: Decimal,
    /// Share of the per diem added when airline mileage is used.
    pub mileage_bonus: Decimal,
}

impl Default for LongDistanceTravelRates {
    fn default() -> Self {
        Self {
            per_diem: 20_000,
            meal: 20_000,
            vehicle_day_ratio: Decimal::new(5, 1),
            lodging_seoul: 70_000,
            lodging_metro: 60_000,
            lodging_other: 50_000,
            lodging_surcharge: Decimal::new(13, 1),
            mileage_bonus: Decimal::new(5, 1),
        }
    }
}

/// Travel expense configuration (`travel.yaml`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TravelRates {
    /// Local trip prices.
    pub local: LocalTravelRates,
    /// Long-distance trip prices.
    pub long_distance: LongDistanceTravelRates,
}

/// Annual-leave rule profiles (`leave_rules.yaml`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LeaveRules {
    /// Profile used when a requested id is unknown.
    pub fallback: String,
    /// Available profiles.
    pub rules: Vec<RuleProfile>,
}

impl LeaveRules {
    /// Looks up a profile, falling back to the configured default.
    ///
    /// Returns `None` only if the fallback profile itself is missing.
    pub fn get(&self, rule_id: &str) -> Option<&RuleProfile> {
        self.rules
            .iter()
            .find(|r| r.id == rule_id)
            .or_else(|| self.rules.iter().find(|r| r.id == self.fallback))
    }
}

impl Default for LeaveRules {
    fn default() -> Self {
        let rule = |id: &str, name: &str, grant_type: GrantType, description: &str| RuleProfile {
            id: id.to_string(),
            name: name.to_string(),
            grant_type,
            rounding_step: 10,
            rounding_mode: RoundingMode::Floor,
            description: description.to_string(),
        };
        Self {
            fallback: "law_basic".to_string(),
            rules: vec![
                rule(
                    "law_basic",
                    "법정 기본형",
                    GrantType::LawBasic,
                    "Simplified Labor Standards Act grant.",
                ),
                rule(
                    "school_cba",
                    "학교근무자 단체협약형",
                    GrantType::CbaLike,
                    "School staff collective agreement sample.",
                ),
                rule(
                    "institute_cba",
                    "기관근무자 단체협약형",
                    GrantType::CbaLike,
                    "Institute staff collective agreement sample.",
                ),
                rule(
                    "wage_guideline",
                    "통상임금 지침형",
                    GrantType::ManualDays,
                    "Days are computed externally; only the payout is calculated.",
                ),
                rule(
                    "custom",
                    "커스텀",
                    GrantType::ManualDays,
                    "Days and rounding are managed manually.",
                ),
            ],
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    metadata: EngineMetadata,
    pay_steps: PayStepTable,
    contract_teacher: ContractTeacherRules,
    stipends: StipendDefaults,
    travel: TravelRates,
    leave_rules: LeaveRules,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        metadata: EngineMetadata,
        pay_steps: PayStepTable,
        contract_teacher: ContractTeacherRules,
        stipends: StipendDefaults,
        travel: TravelRates,
        leave_rules: LeaveRules,
    ) -> Self {
        Self {
            metadata,
            pay_steps,
            contract_teacher,
            stipends,
            travel,
            leave_rules,
        }
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the base pay schedule.
    pub fn pay_steps(&self) -> &PayStepTable {
        &self.pay_steps
    }

    /// Returns the contract teacher rules.
    pub fn contract_teacher(&self) -> &ContractTeacherRules {
        &self.contract_teacher
    }

    /// Returns the stipend defaults.
    pub fn stipends(&self) -> &StipendDefaults {
        &self.stipends
    }

    /// Returns the travel rates.
    pub fn travel(&self) -> &TravelRates {
        &self.travel
    }

    /// Returns the annual-leave rule profiles.
    pub fn leave_rules(&self) -> &LeaveRules {
        &self.leave_rules
    }
}
