//! Travel expense verification for the reviewer.
//!
//! Two checks are supported: a monthly check of a disbursement total
//! against trip counts and unit prices, and a row-by-row check of individual
//! payments against the unit price of each row's trip type.

use crate::error::{EngineError, EngineResult};
use crate::models::{
    DetailAuditInput, DetailAuditResult, MonthlyAuditInput, MonthlyAuditResult, PaymentVerdict,
    RowAuditResult, TripType,
};

fn validate_unit_prices(unit_half: i64, unit_full: i64) -> EngineResult<()> {
    if unit_half <= 0 || unit_full <= 0 {
        return Err(EngineError::invalid_input(
            "unit_price",
            "half-day and full-day unit prices must be greater than zero",
        ));
    }
    Ok(())
}

/// Verifies a month's disbursement total.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when a count is negative, a unit
/// price is not positive, or the decided total is not positive.
///
/// # Examples
///
/// ```
/// use edupay_engine::calculation::audit_monthly_total;
/// use edupay_engine::models::{MonthlyAuditInput, PaymentVerdict};
///
/// let input = MonthlyAuditInput {
///     label: "2025-05".to_string(),
///     decided_total: 150_000,
///     half_day_count: 5,
///     full_day_count: 5,
///     unit_half: 10_000,
///     unit_full: 20_000,
/// };
/// let result = audit_monthly_total(&input).unwrap();
/// assert_eq!(result.expected_total, 150_000);
/// assert_eq!(result.verdict, PaymentVerdict::Match);
/// ```
pub fn audit_monthly_total(input: &MonthlyAuditInput) -> EngineResult<MonthlyAuditResult> {
    if input.half_day_count < 0 || input.full_day_count < 0 {
        return Err(EngineError::invalid_input(
            "trip_count",
            "half-day and full-day counts must not be negative",
        ));
    }
    validate_unit_prices(input.unit_half, input.unit_full)?;
    if input.decided_total <= 0 {
        return Err(EngineError::invalid_input(
            "decided_total",
            "disbursement total must be greater than zero",
        ));
    }

    let half_day_subtotal = input.half_day_count.saturating_mul(input.unit_half);
    let full_day_subtotal = input.full_day_count.saturating_mul(input.unit_full);
    let expected_total = half_day_subtotal.saturating_add(full_day_subtotal);
    let difference = input.decided_total - expected_total;
    let verdict = PaymentVerdict::from_difference(difference);

    let message = match verdict {
        PaymentVerdict::Match => {
            "Disbursement total matches the expected amount.".to_string()
        }
        PaymentVerdict::Overpaid(amount) => format!(
            "Disbursement total exceeds the expected amount by {} won (possible overpayment).",
            amount
        ),
        PaymentVerdict::Underpaid(amount) => format!(
            "Disbursement total is {} won below the expected amount (possible missing trips).",
            amount
        ),
    };

    Ok(MonthlyAuditResult {
        label: input.label.clone(),
        half_day_subtotal,
        full_day_subtotal,
        expected_total,
        decided_total: input.decided_total,
        difference,
        verdict,
        message,
    })
}

/// Verifies individual payment rows.
///
/// A row with a blank name and nothing paid is treated as empty and skipped;
/// it appears in the output with message `"no input"` and is excluded from
/// every total.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when a unit price is not positive
/// or there are no rows.
///
/// # Examples
///
/// ```
/// use edupay_engine::calculation::audit_payment_rows;
/// use edupay_engine::models::{DetailAuditInput, PaymentRow, TripType};
///
/// let input = DetailAuditInput {
///     unit_half: 10_000,
///     unit_full: 20_000,
///     rows: vec![
///         PaymentRow { name: "김교사".to_string(), trip_type: TripType::Half, paid: 10_000 },
///         PaymentRow { name: "이교사".to_string(), trip_type: TripType::Half, paid: 9_000 },
///     ],
/// };
/// let result = audit_payment_rows(&input).unwrap();
/// assert_eq!(result.rows[0].message, "match");
/// assert_eq!(result.rows[1].message, "mismatch, underpaid by 1000");
/// ```
pub fn audit_payment_rows(input: &DetailAuditInput) -> EngineResult<DetailAuditResult> {
    validate_unit_prices(input.unit_half, input.unit_full)?;
    if input.rows.is_empty() {
        return Err(EngineError::invalid_input(
            "rows",
            "there are no rows to verify",
        ));
    }

    let mut rows = Vec::with_capacity(input.rows.len());
    let mut total_expected: i64 = 0;
    let mut total_paid: i64 = 0;
    let mut mismatch_count = 0;

    for (index, row) in input.rows.iter().enumerate() {
        let name = row.name.trim().to_string();

        if name.is_empty() && row.paid == 0 {
            rows.push(RowAuditResult {
                row_number: index + 1,
                name,
                expected: None,
                verdict: None,
                message: "no input".to_string(),
            });
            continue;
        }

        let expected = match row.trip_type {
            TripType::Half => input.unit_half,
            TripType::Full => input.unit_full,
        };
        let verdict = PaymentVerdict::from_difference(row.paid - expected);
        if !verdict.is_match() {
            mismatch_count += 1;
        }
        total_expected = total_expected.saturating_add(expected);
        total_paid = total_paid.saturating_add(row.paid);

        rows.push(RowAuditResult {
            row_number: index + 1,
            name,
            expected: Some(expected),
            verdict: Some(verdict),
            message: verdict.to_string(),
        });
    }

    Ok(DetailAuditResult {
        rows,
        total_expected,
        total_paid,
        difference: total_paid - total_expected,
        mismatch_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentRow;

    fn monthly(decided: i64, half: i64, full: i64) -> MonthlyAuditInput {
        MonthlyAuditInput {
            label: "5월".to_string(),
            decided_total: decided,
            half_day_count: half,
            full_day_count: full,
            unit_half: 10_000,
            unit_full: 20_000,
        }
    }

    fn row(name: &str, trip_type: TripType, paid: i64) -> PaymentRow {
        PaymentRow {
            name: name.to_string(),
            trip_type,
            paid,
        }
    }

    #[test]
    fn test_monthly_overpaid() {
        let result = audit_monthly_total(&monthly(100_000, 3, 3)).unwrap();
        assert_eq!(result.expected_total, 90_000);
        assert_eq!(result.difference, 10_000);
        assert_eq!(result.verdict, PaymentVerdict::Overpaid(10_000));
    }

    #[test]
    fn test_monthly_underpaid() {
        let result = audit_monthly_total(&monthly(80_000, 3, 3)).unwrap();
        assert_eq!(result.verdict, PaymentVerdict::Underpaid(10_000));
        assert!(result.message.contains("10000"));
    }

    #[test]
    fn test_monthly_validation() {
        assert!(audit_monthly_total(&monthly(100_000, -1, 3)).is_err());
        assert!(audit_monthly_total(&monthly(0, 1, 3)).is_err());

        let zero_unit = MonthlyAuditInput {
            unit_full: 0,
            ..monthly(100_000, 1, 1)
        };
        assert!(matches!(
            audit_monthly_total(&zero_unit),
            Err(EngineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_rows_skip_empty_and_summarize() {
        let input = DetailAuditInput {
            unit_half: 10_000,
            unit_full: 20_000,
            rows: vec![
                row("김교사", TripType::Half, 10_000),
                row("  ", TripType::Full, 0),
                row("이교사", TripType::Full, 25_000),
                row("박교사", TripType::Half, 9_000),
            ],
        };
        let result = audit_payment_rows(&input).unwrap();

        assert_eq!(result.rows.len(), 4);
        assert_eq!(result.rows[1].message, "no input");
        assert_eq!(result.rows[1].expected, None);
        assert_eq!(result.rows[2].message, "mismatch, overpaid by 5000");
        assert_eq!(result.rows[3].row_number, 4);
        assert_eq!(result.total_expected, 40_000);
        assert_eq!(result.total_paid, 44_000);
        assert_eq!(result.difference, 4_000);
        assert_eq!(result.mismatch_count, 2);
    }

    #[test]
    fn test_row_with_name_and_zero_paid_is_checked() {
        let input = DetailAuditInput {
            unit_half: 10_000,
            unit_full: 20_000,
            rows: vec![row("최교사", TripType::Full, 0)],
        };
        let result = audit_payment_rows(&input).unwrap();
        assert_eq!(result.rows[0].verdict, Some(PaymentVerdict::Underpaid(20_000)));
        assert_eq!(result.mismatch_count, 1);
    }

    #[test]
    fn test_rows_required() {
        let input = DetailAuditInput {
            unit_half: 10_000,
            unit_full: 20_000,
            rows: vec![],
        };
        assert!(matches!(
            audit_payment_rows(&input),
            Err(EngineError::InvalidInput { .. })
        ));
    }
}
