//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod contract;
mod leave;
mod stipend;
mod travel;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, ContractWageResult, ContractWageTotals, MonthlyWageLine,
    PayRates,
};
pub use contract::{
    ContractPeriod, DayCategory, DayClassification, MonthBucket, MonthKey, OverrideInterval,
    ParseMonthKeyError,
};
pub(crate) use contract::lenient_date;
pub use leave::{
    GrantType, LeavePayout, LeavePayoutInput, LeavePayoutResult, LeaveSuggestion,
    LeaveTypeSummary, NiceRecord, RoundingMode, RuleProfile, ServiceInfo, WageInfo, WageType,
};
pub use stipend::{
    OrdinaryWageSnapshot, StipendStatus, VacationTrainingInput, VacationTrainingResult,
    WeekendEducationInput, WeekendEducationResult,
};
pub use travel::{
    DetailAuditInput, DetailAuditResult, LocalTripBasis, LocalTripInput, LocalTripResult,
    LodgingRegion, LongDistanceTripInput, LongDistanceTripResult, MonthlyAuditInput,
    MonthlyAuditResult, PaymentRow, PaymentVerdict, RowAuditResult, TripType,
};
