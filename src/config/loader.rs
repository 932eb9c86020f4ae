//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll rule
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::RuleProfile;

use super::types::{
    ContractTeacherRules, EngineConfig, EngineMetadata, LeaveRules, PayStepTable, PayStepsFile,
    StipendDefaults, TravelRates,
};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query the pay step schedule and rule sets.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/edupay/
/// ├── engine.yaml            # Rule set metadata
/// ├── pay_steps.yaml         # 40-step base pay schedule
/// ├── contract_teacher.yaml  # Working hours and employer insurance rates
/// ├── stipends.yaml          # Stipend defaults
/// ├── travel.yaml            # Travel expense unit prices
/// └── leave_rules.yaml       # Annual leave rule profiles
/// ```
///
/// # Example
///
/// ```no_run
/// use edupay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/edupay").unwrap();
///
/// let base = loader.standard_monthly(12).unwrap();
/// println!("Step 12 base pay: {} won", base);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The pay step schedule does not cover steps 1-40 exactly once
    ///
    /// # Example
    ///
    /// ```no_run
    /// use edupay_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/edupay")?;
    /// # Ok::<(), edupay_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;

        let steps_file = Self::load_yaml::<PayStepsFile>(&path.join("pay_steps.yaml"))?;
        let pay_steps = PayStepTable::new(steps_file.effective_date, &steps_file.steps)?;

        let contract_teacher =
            Self::load_yaml::<ContractTeacherRules>(&path.join("contract_teacher.yaml"))?;
        let stipends = Self::load_yaml::<StipendDefaults>(&path.join("stipends.yaml"))?;
        let travel = Self::load_yaml::<TravelRates>(&path.join("travel.yaml"))?;

        let leave_rules = Self::load_yaml::<LeaveRules>(&path.join("leave_rules.yaml"))?;
        if leave_rules.get(&leave_rules.fallback).is_none() {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "fallback leave rule '{}' is not defined",
                    leave_rules.fallback
                ),
            });
        }

        let config = EngineConfig::new(
            metadata,
            pay_steps,
            contract_teacher,
            stipends,
            travel,
            leave_rules,
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration, typically the built-in defaults.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Gets the standard monthly base pay (8h/day) for a step.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use edupay_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/edupay")?;
    /// assert_eq!(loader.standard_monthly(1)?, 1_915_100);
    /// # Ok::<(), edupay_engine::error::EngineError>(())
    /// ```
    pub fn standard_monthly(&self, step: u32) -> EngineResult<i64> {
        self.config.pay_steps().standard_monthly(step)
    }

    /// Gets an annual leave rule profile, falling back to the default profile.
    pub fn leave_rule(&self, rule_id: &str) -> EngineResult<&RuleProfile> {
        self.config
            .leave_rules()
            .get(rule_id)
            .ok_or_else(|| EngineError::InvalidConfig {
                message: format!("no leave rule '{}' and no fallback rule", rule_id),
            })
    }

    /// Returns the contract teacher rules.
    pub fn contract_teacher(&self) -> &ContractTeacherRules {
        self.config.contract_teacher()
    }

    /// Returns the stipend defaults.
    pub fn stipends(&self) -> &StipendDefaults {
        self.config.stipends()
    }

    /// Returns the travel rates.
    pub fn travel(&self) -> &TravelRates {
        self.config.travel()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_config(EngineConfig::default())
    }
}
