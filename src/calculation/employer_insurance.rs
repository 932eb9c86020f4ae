//! Employer statutory insurance contribution rate.
//!
//! The employer pays health, national pension, employment and industrial
//! accident insurance on wages, plus long-term care insurance levied as a
//! share of the health insurance contribution. The composite rate is applied
//! to each month's wages plus annual allowance share.

use rust_decimal::Decimal;

use crate::config::EmployerInsuranceRates;
use crate::models::AuditStep;

/// The composite employer rate and the audit step that derived it.
#[derive(Debug, Clone)]
pub struct EmployerRateResult {
    /// Sum of every insurance component, as a fraction of wages.
    pub rate: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the composite employer contribution rate.
///
/// # Examples
///
/// ```
/// use edupay_engine::calculation::employer_contribution_rate;
/// use edupay_engine::config::EmployerInsuranceRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = employer_contribution_rate(&EmployerInsuranceRates::default(), 1);
/// assert_eq!(result.rate, Decimal::from_str("0.112200775").unwrap());
/// ```
pub fn employer_contribution_rate(
    rates: &EmployerInsuranceRates,
    step_number: u32,
) -> EmployerRateResult {
    let long_term_care = rates.long_term_care();
    let rate = rates.composite_rate();

    let audit_step = AuditStep {
        step_number,
        rule_id: "employer_insurance_rate".to_string(),
        rule_name: "Employer Insurance Rate".to_string(),
        input: serde_json::json!({
            "health": rates.health.normalize().to_string(),
            "pension": rates.pension.normalize().to_string(),
            "employment": rates.employment.normalize().to_string(),
            "industrial_accident": rates.industrial_accident.normalize().to_string(),
            "long_term_care_of_health": rates.long_term_care_of_health.normalize().to_string(),
        }),
        output: serde_json::json!({
            "long_term_care": long_term_care.normalize().to_string(),
            "rate": rate.normalize().to_string(),
        }),
        reasoning: format!(
            "{} + {} + {} + {} + ({} x {}) = {}",
            rates.health.normalize(),
            rates.pension.normalize(),
            rates.employment.normalize(),
            rates.industrial_accident.normalize(),
            rates.health.normalize(),
            rates.long_term_care_of_health.normalize(),
            rate.normalize()
        ),
    };

    EmployerRateResult { rate, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_composite_rate() {
        let result = employer_contribution_rate(&EmployerInsuranceRates::default(), 4);
        assert_eq!(result.rate, dec("0.112200775"));
        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.output["rate"], "0.112200775");
    }

    #[test]
    fn test_long_term_care_follows_health_rate() {
        let rates = EmployerInsuranceRates {
            health: dec("0.04"),
            pension: Decimal::ZERO,
            employment: Decimal::ZERO,
            industrial_accident: Decimal::ZERO,
            long_term_care_of_health: dec("0.125"),
        };
        let result = employer_contribution_rate(&rates, 1);
        assert_eq!(result.rate, dec("0.045"));
    }
}
