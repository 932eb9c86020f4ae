//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load rule configurations from YAML
//! files: the base pay step schedule, contract teacher working-time and
//! insurance rules, stipend defaults, travel unit prices and annual leave
//! rule profiles.
//!
//! # Example
//!
//! ```no_run
//! use edupay_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/edupay").unwrap();
//! println!("Loaded rules: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ContractTeacherRules, EmployerInsuranceRates, EngineConfig, EngineMetadata, LeaveRules,
    LocalTravelRates, LongDistanceTravelRates, PAY_STEP_COUNT, PayStepEntry, PayStepTable,
    PayStepsFile, StipendDefaults, TravelRates,
};
