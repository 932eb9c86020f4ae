//! Property-based tests for the contract teacher calculators.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use edupay_engine::calculation::{
    aggregate_by_month, calculate_monthly_wages, classify_days, floor_to_10, round_half_up,
};
use edupay_engine::config::ContractTeacherRules;
use edupay_engine::models::{ContractPeriod, DayCategory, MonthBucket, OverrideInterval, PayRates};

fn origin() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

// Generate contract periods of up to about 13 months
prop_compose! {
    fn arb_period()(offset in 0..800i64, length in 0..400i64) -> ContractPeriod {
        let start = origin() + Duration::days(offset);
        ContractPeriod {
            start,
            end: start + Duration::days(length),
        }
    }
}

// Generate override intervals anywhere around the contract range
prop_compose! {
    fn arb_interval()(offset in 0..1300i64, length in 0..90i64) -> OverrideInterval {
        let start = origin() + Duration::days(offset);
        OverrideInterval::new(start, start + Duration::days(length))
    }
}

// Generate hourly rates in won with up to four decimal places
prop_compose! {
    fn arb_rate()(units in 10_030_0000i64..60_000_0000i64) -> Decimal {
        Decimal::new(units, 4)
    }
}

prop_compose! {
    fn arb_pay_rates()(semester in arb_rate(), vacation in arb_rate()) -> PayRates {
        PayRates {
            base_pay_semester: 0,
            base_pay_vacation: 0,
            semester_monthly_total: 0,
            vacation_monthly_total: 0,
            semester_hourly_rate: semester,
            vacation_hourly_rate: vacation,
        }
    }
}

// Month rows with at least one working day, at most 28 days each
prop_compose! {
    fn arb_months()(
        rows in prop::collection::vec((1..=28u32, 0..=28u32, 0..=28u32), 1..=12)
    ) -> Vec<MonthBucket> {
        rows.into_iter()
            .enumerate()
            .map(|(index, (semester, vacation, non_operating))| {
                let total = semester + vacation + non_operating;
                let scale = |days: u32| if total > 28 { days * 28 / total } else { days };
                MonthBucket {
                    month: format!("2025-{:02}", index + 1).parse().unwrap(),
                    semester_days: scale(semester).max(1),
                    vacation_days: scale(vacation),
                    non_operating_days: scale(non_operating),
                }
            })
            .collect()
    }
}

proptest! {
    #[test]
    fn classification_covers_every_date_once(
        period in arb_period(),
        vacations in prop::collection::vec(arb_interval(), 0..4),
        non_operating in prop::collection::vec(arb_interval(), 0..4),
    ) {
        let days = classify_days(&period, &vacations, &non_operating);
        let expected = (period.end - period.start).num_days() + 1;

        prop_assert_eq!(days.len() as i64, expected);
        for (date, _) in days.iter() {
            prop_assert!(date >= period.start && date <= period.end);
        }
        let counted = days.count(DayCategory::Semester)
            + days.count(DayCategory::Vacation)
            + days.count(DayCategory::NonOperating);
        prop_assert_eq!(counted, days.len());
    }

    #[test]
    fn non_operating_wins_over_vacation(
        period in arb_period(),
        vacation in arb_interval(),
        non_operating in arb_interval(),
    ) {
        let days = classify_days(&period, &[vacation.clone()], &[non_operating.clone()]);

        let covers = |interval: &OverrideInterval, date: NaiveDate| {
            matches!((interval.start, interval.end), (Some(s), Some(e)) if date >= s && date <= e)
        };
        for (date, category) in days.iter() {
            let in_vacation = covers(&vacation, date);
            let in_non_operating = covers(&non_operating, date);
            let expected = if in_non_operating {
                DayCategory::NonOperating
            } else if in_vacation {
                DayCategory::Vacation
            } else {
                DayCategory::Semester
            };
            prop_assert_eq!(category, expected);
        }
    }

    #[test]
    fn overrides_outside_the_period_change_nothing(
        period in arb_period(),
        gap in 1..60i64,
        length in 0..60i64,
    ) {
        let after = period.end + Duration::days(gap);
        let before_end = period.start - Duration::days(gap);
        let outside = vec![
            OverrideInterval::new(after, after + Duration::days(length)),
            OverrideInterval::new(before_end - Duration::days(length), before_end),
        ];

        let plain = classify_days(&period, &[], &[]);
        let overridden = classify_days(&period, &outside, &outside);

        prop_assert_eq!(plain.len(), overridden.len());
        prop_assert_eq!(overridden.count(DayCategory::Semester), overridden.len());
    }

    #[test]
    fn aggregation_preserves_day_counts(
        period in arb_period(),
        vacations in prop::collection::vec(arb_interval(), 0..3),
        non_operating in prop::collection::vec(arb_interval(), 0..3),
    ) {
        let days = classify_days(&period, &vacations, &non_operating);
        let months = aggregate_by_month(&days).unwrap();

        let total: u64 = months.iter().map(|m| m.total_days()).sum();
        prop_assert_eq!(total as usize, days.len());
        prop_assert_eq!(
            months.iter().map(|m| m.vacation_days as usize).sum::<usize>(),
            days.count(DayCategory::Vacation)
        );
        prop_assert!(months.windows(2).all(|w| w[0].month < w[1].month));
    }

    #[test]
    fn twenty_semester_days_are_eighty_hours(rates in arb_pay_rates()) {
        let month = MonthBucket {
            month: "2025-04".parse().unwrap(),
            semester_days: 20,
            vacation_days: 0,
            non_operating_days: 0,
        };
        let result = calculate_monthly_wages(
            &[month],
            &rates,
            0,
            Decimal::ZERO,
            &ContractTeacherRules::default(),
            1,
        )
        .unwrap();

        prop_assert_eq!(result.lines[0].work_hours, Decimal::from(80));
        prop_assert_eq!(
            result.lines[0].wage_subtotal,
            round_half_up(rates.semester_hourly_rate * Decimal::from(80))
        );
    }

    #[test]
    fn annual_shares_add_up_to_the_annual_total(
        months in arb_months(),
        rates in arb_pay_rates(),
        annual_total in 0..2_000_000i64,
    ) {
        let result = calculate_monthly_wages(
            &months,
            &rates,
            annual_total,
            Decimal::ZERO,
            &ContractTeacherRules::default(),
            1,
        )
        .unwrap();

        // Shares floored to whole won lose less than one won per month
        let total_hours = result.totals.work_hours;
        let floored: Decimal = result
            .lines
            .iter()
            .map(|l| (Decimal::from(annual_total) * l.work_hours / total_hours).floor())
            .sum();
        prop_assert!(floored <= Decimal::from(annual_total));
        prop_assert!(floored >= Decimal::from(annual_total - months.len() as i64));
    }

    #[test]
    fn final_amounts_are_truncated_to_ten_won(
        months in arb_months(),
        rates in arb_pay_rates(),
        annual_total in 0..2_000_000i64,
    ) {
        let rules = ContractTeacherRules::default();
        let employer_rate = rules.insurance.composite_rate();
        let result = calculate_monthly_wages(
            &months,
            &rates,
            annual_total,
            employer_rate,
            &rules,
            1,
        )
        .unwrap();

        for line in &result.lines {
            prop_assert_eq!(line.final_amount % 10, 0);
            // Components are rounded to won, so allow for their rounding
            let components =
                line.wage_subtotal + line.annual_allowance_share + line.employer_contribution;
            prop_assert!(line.final_amount <= components + 1);
            prop_assert!(line.final_amount > components - 12);
        }

        let totals = &result.totals;
        prop_assert_eq!(totals.final_amount % 10, 0);
        prop_assert!(totals.final_amount >= totals.monthly_final_sum);
        prop_assert!(totals.final_amount - totals.monthly_final_sum < 10 * months.len() as i64);
    }

    #[test]
    fn floor_to_10_never_rounds_up(units in -1_000_000_000i64..1_000_000_000i64) {
        let amount = Decimal::new(units, 2);
        let floored = floor_to_10(amount);

        prop_assert_eq!(floored % 10, 0);
        prop_assert!(Decimal::from(floored) <= amount);
        prop_assert!(amount - Decimal::from(floored) < Decimal::TEN);
    }
}
