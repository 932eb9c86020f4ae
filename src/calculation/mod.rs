//! Calculation logic for the education payroll engine.
//!
//! This module contains the calculators for contract-teacher wages (day
//! classification, monthly aggregation, pay-rate derivation and monthly
//! wages), the vacation-training and weekend-education stipends, travel
//! expenses and their verification, and unused annual leave payouts.

mod annual_leave;
mod contract_pipeline;
mod contract_wages;
mod date_range;
mod day_classification;
mod employer_insurance;
mod monthly_aggregation;
mod pay_steps;
mod rounding;
mod travel_audit;
mod travel_expense;
mod vacation_training;
mod weekend_education;

pub use annual_leave::{
    DurationParser, apply_leave_rounding, calculate_leave_payout, calculate_unused_payout,
    daily_wage, suggest_annual_days, summarize_records,
};
pub use contract_pipeline::{
    ContractTeacherInput, ContractTeacherResult, MonthTable, MonthTableInput, WageInput,
    build_month_table, calculate_contract_teacher, calculate_contract_wages,
};
pub use contract_wages::{
    AnnualAllowance, MonthlyAllowance, MonthlyWageCalculation, PayRateDerivation,
    annual_allowance_total, calculate_monthly_wages, derive_pay_rates, month_work_hours,
};
pub use date_range::{DateRange, DateRangeIter, parse_date};
pub use day_classification::classify_days;
pub use employer_insurance::{EmployerRateResult, employer_contribution_rate};
pub use monthly_aggregation::aggregate_by_month;
pub use pay_steps::{
    BasePayInput, BasePayResolution, BasePaySource, ResolvedBasePay, StepBasePay,
    base_pay_from_step, resolve_base_pay,
};
pub use rounding::{floor_to_10, round_half_up, round_won};
pub use travel_audit::{audit_monthly_total, audit_payment_rows};
pub use travel_expense::{calculate_local_trip, calculate_long_distance_trip};
pub use vacation_training::calculate_vacation_training;
pub use weekend_education::calculate_weekend_education;
