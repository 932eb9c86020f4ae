//! Performance benchmarks for the education payroll engine.
//!
//! Covers the library calculators directly and the HTTP path end to end:
//! - Day classification and monthly aggregation for a school year
//! - Contract wages for twelve months
//! - Full contract teacher request through the router
//! - Batch of 100 mixed stipend and travel requests
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use edupay_engine::api::{AppState, create_router};
use edupay_engine::calculation::{
    BasePayInput, MonthTableInput, WageInput, aggregate_by_month, build_month_table,
    calculate_contract_wages, classify_days, summarize_records,
};
use edupay_engine::config::ConfigLoader;
use edupay_engine::models::{ContractPeriod, NiceRecord, OverrideInterval};

use axum::{body::Body, http::Request};
use rust_decimal::Decimal;
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/edupay").expect("Failed to load config");
    AppState::new(config)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn school_year() -> MonthTableInput {
    MonthTableInput {
        contract_start: Some(date(2025, 3, 1)),
        contract_end: Some(date(2026, 2, 28)),
        vacations: vec![
            OverrideInterval::new(date(2025, 7, 21), date(2025, 8, 22)),
            OverrideInterval::new(date(2026, 1, 5), date(2026, 2, 28)),
        ],
        non_operating: vec![OverrideInterval::new(date(2025, 8, 18), date(2025, 8, 22))],
    }
}

fn bench_classification(c: &mut Criterion) {
    let input = school_year();
    let period = ContractPeriod {
        start: date(2025, 3, 1),
        end: date(2026, 2, 28),
    };

    c.bench_function("classify_and_aggregate_school_year", |b| {
        b.iter(|| {
            let days = classify_days(
                black_box(&period),
                black_box(&input.vacations),
                black_box(&input.non_operating),
            );
            black_box(aggregate_by_month(&days).unwrap())
        })
    });
}

fn bench_contract_wages(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/edupay").expect("Failed to load config");
    let table = build_month_table(&school_year()).unwrap();
    let input = WageInput {
        base_pay: BasePayInput {
            step: Some(12),
            ..BasePayInput::default()
        },
        months: table.months,
        ..WageInput::default()
    };

    c.bench_function("contract_wages_12_months", |b| {
        b.iter(|| black_box(calculate_contract_wages(black_box(&input), &config).unwrap()))
    });
}

fn bench_record_summary(c: &mut Criterion) {
    let durations = ["0일 6시간 30분", "1일", "3:30", "1.5일", "2시간 15분"];
    let leave_types = ["연가", "병가", "공가"];

    let mut group = c.benchmark_group("record_summary");
    for count in [10usize, 100, 1000] {
        let records: Vec<NiceRecord> = (0..count)
            .map(|i| NiceRecord {
                leave_type: leave_types[i % leave_types.len()].to_string(),
                duration: durations[i % durations.len()].to_string(),
                hours_per_day: Decimal::from(8),
            })
            .collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &records, |b, records| {
            b.iter(|| black_box(summarize_records(records).unwrap()))
        });
    }
    group.finish();
}

fn bench_contract_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "contract_start": "2025-03-01",
        "contract_end": "2026-02-28",
        "vacations": [
            {"start": "2025-07-21", "end": "2025-08-22"},
            {"start": "2026-01-05", "end": "2026-02-28"}
        ],
        "non_operating": [{"start": "2025-08-18", "end": "2025-08-22"}],
        "base_pay": {"step": 12},
        "annual_allowances": [{"name": "명절휴가비", "amount": 400000}]
    })
    .to_string();

    c.bench_function("contract_teacher_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/contract-teacher/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<(&str, String)> = (0..100)
        .map(|i| match i % 3 {
            0 => (
                "/stipends/vacation-training",
                serde_json::json!({"basic_pay": 2_000_000 + i * 1_000, "meal_allowance": 150000})
                    .to_string(),
            ),
            1 => (
                "/travel/long-distance",
                serde_json::json!({"days": 1 + i % 5, "nights": i % 5, "fare": 50000})
                    .to_string(),
            ),
            _ => (
                "/travel/local",
                serde_json::json!({"distance_km": "8", "hours": (i % 8 + 1).to_string()})
                    .to_string(),
            ),
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for (uri, body) in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri(*uri)
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_classification,
    bench_contract_wages,
    bench_record_summary,
    bench_contract_request,
    bench_batch_100,
);
criterion_main!(benches);
