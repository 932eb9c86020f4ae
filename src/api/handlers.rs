//! HTTP request handlers for the education payroll API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! handler follows the same shape: assign a correlation id, decode the JSON
//! body, run one calculator against the shared configuration and map the
//! outcome to a JSON response.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    ContractTeacherInput, MonthTableInput, WageInput, audit_monthly_total, audit_payment_rows,
    base_pay_from_step, build_month_table, calculate_contract_teacher, calculate_contract_wages,
    calculate_leave_payout, calculate_local_trip, calculate_long_distance_trip,
    calculate_vacation_training, calculate_weekend_education, summarize_records,
};
use crate::error::EngineResult;
use crate::models::{
    DetailAuditInput, LeavePayoutInput, LocalTripInput, LongDistanceTripInput,
    MonthlyAuditInput, VacationTrainingInput, WeekendEducationInput,
};

use super::request::RecordSummaryRequest;
use super::response::{ApiError, ApiErrorResponse, PayStepResponse, RecordSummaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/contract-teacher/months", post(month_table_handler))
        .route("/contract-teacher/wages", post(contract_wages_handler))
        .route("/contract-teacher/calculate", post(contract_teacher_handler))
        .route("/pay-steps/:step", get(pay_step_handler))
        .route("/stipends/vacation-training", post(vacation_training_handler))
        .route("/stipends/weekend-education", post(weekend_education_handler))
        .route("/travel/local", post(local_trip_handler))
        .route("/travel/long-distance", post(long_distance_trip_handler))
        .route("/travel/audit/monthly", post(monthly_audit_handler))
        .route("/travel/audit/details", post(detail_audit_handler))
        .route("/annual-leave/payout", post(leave_payout_handler))
        .route("/annual-leave/records/summary", post(record_summary_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a body rejection to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the failure
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}

/// Maps a calculator outcome to a response, logging either way.
fn outcome_response<T: Serialize>(
    correlation_id: Uuid,
    operation: &'static str,
    start_time: Instant,
    result: EngineResult<T>,
) -> Response {
    match result {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                operation,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, body)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                operation,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Decodes the body and runs one calculator.
fn handle<I, O>(
    operation: &'static str,
    payload: Result<Json<I>, JsonRejection>,
    calculate: impl FnOnce(&I) -> EngineResult<O>,
) -> Response
where
    O: Serialize,
{
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, operation, "Processing request");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let result = calculate(&input);
    outcome_response(correlation_id, operation, start_time, result)
}

/// Handler for POST /contract-teacher/months.
///
/// Classifies the contract period and returns the editable month table.
async fn month_table_handler(payload: Result<Json<MonthTableInput>, JsonRejection>) -> Response {
    handle("contract_teacher.months", payload, build_month_table)
}

/// Handler for POST /contract-teacher/wages.
///
/// Prices a (possibly user-edited) month table.
async fn contract_wages_handler(
    State(state): State<AppState>,
    payload: Result<Json<WageInput>, JsonRejection>,
) -> Response {
    handle("contract_teacher.wages", payload, |input| {
        calculate_contract_wages(input, state.config())
    })
}

/// Handler for POST /contract-teacher/calculate.
///
/// Builds the month table and prices it in one request.
async fn contract_teacher_handler(
    State(state): State<AppState>,
    payload: Result<Json<ContractTeacherInput>, JsonRejection>,
) -> Response {
    handle("contract_teacher.calculate", payload, |input| {
        calculate_contract_teacher(input, state.config())
    })
}

/// Handler for GET /pay-steps/:step.
async fn pay_step_handler(
    State(state): State<AppState>,
    step: Result<Path<u32>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, operation = "pay_steps", "Processing request");

    let step = match step {
        Ok(Path(step)) => step,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid pay step"
            );
            return ApiErrorResponse::bad_request(ApiError::validation_error(format!(
                "Invalid pay step: {}",
                rejection.body_text()
            )))
            .into_response();
        }
    };

    let start_time = Instant::now();
    let pay_steps = state.config().config().pay_steps();
    let result = base_pay_from_step(pay_steps, state.config().contract_teacher(), step).map(
        |base_pay| PayStepResponse {
            effective_date: pay_steps.effective_date(),
            base_pay,
        },
    );
    outcome_response(correlation_id, "pay_steps", start_time, result)
}

/// Handler for POST /stipends/vacation-training.
async fn vacation_training_handler(
    State(state): State<AppState>,
    payload: Result<Json<VacationTrainingInput>, JsonRejection>,
) -> Response {
    handle("stipends.vacation_training", payload, |input| {
        calculate_vacation_training(input, state.config().stipends())
    })
}

/// Handler for POST /stipends/weekend-education.
async fn weekend_education_handler(
    State(state): State<AppState>,
    payload: Result<Json<WeekendEducationInput>, JsonRejection>,
) -> Response {
    handle("stipends.weekend_education", payload, |input| {
        calculate_weekend_education(input, state.config().stipends())
    })
}

/// Handler for POST /travel/local.
async fn local_trip_handler(
    State(state): State<AppState>,
    payload: Result<Json<LocalTripInput>, JsonRejection>,
) -> Response {
    handle("travel.local", payload, |input| {
        calculate_local_trip(input, &state.config().travel().local)
    })
}

/// Handler for POST /travel/long-distance.
async fn long_distance_trip_handler(
    State(state): State<AppState>,
    payload: Result<Json<LongDistanceTripInput>, JsonRejection>,
) -> Response {
    handle("travel.long_distance", payload, |input| {
        calculate_long_distance_trip(input, &state.config().travel().long_distance)
    })
}

/// Handler for POST /travel/audit/monthly.
async fn monthly_audit_handler(
    payload: Result<Json<MonthlyAuditInput>, JsonRejection>,
) -> Response {
    handle("travel.audit_monthly", payload, audit_monthly_total)
}

/// Handler for POST /travel/audit/details.
async fn detail_audit_handler(payload: Result<Json<DetailAuditInput>, JsonRejection>) -> Response {
    handle("travel.audit_details", payload, audit_payment_rows)
}

/// Handler for POST /annual-leave/payout.
async fn leave_payout_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeavePayoutInput>, JsonRejection>,
) -> Response {
    handle("annual_leave.payout", payload, |input| {
        calculate_leave_payout(input, state.config().config().leave_rules())
    })
}

/// Handler for POST /annual-leave/records/summary.
async fn record_summary_handler(
    payload: Result<Json<RecordSummaryRequest>, JsonRejection>,
) -> Response {
    handle("annual_leave.records_summary", payload, |input| {
        summarize_records(&input.records).map(|summaries| RecordSummaryResponse { summaries })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::default()
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_month_table_returns_200() {
        let router = create_router(create_test_state());
        let body = r#"{"contract_start": "2025-03-01", "contract_end": "2025-03-31"}"#;

        let (status, json) = send(router, post_json("/contract-teacher/months", body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["months"][0]["month"], "2025-03");
        assert_eq!(json["months"][0]["semester_days"], 31);
    }

    #[tokio::test]
    async fn test_missing_contract_start_returns_validation_error() {
        let router = create_router(create_test_state());
        let body = r#"{"contract_end": "2025-03-31"}"#;

        let (status, json) = send(router, post_json("/contract-teacher/months", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_invalid_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, json) = send(router, post_json("/travel/local", "{ not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_required_field_returns_validation_error() {
        let router = create_router(create_test_state());

        let (status, json) =
            send(router, post_json("/annual-leave/records/summary", "{}")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let router = create_router(create_test_state());
        let request = Request::builder()
            .method("POST")
            .uri("/travel/audit/monthly")
            .body(Body::from("{}"))
            .unwrap();

        let (status, json) = send(router, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_pay_step_lookup() {
        let router = create_router(create_test_state());
        let request = Request::builder()
            .method("GET")
            .uri("/pay-steps/1")
            .body(Body::empty())
            .unwrap();

        let (status, json) = send(router, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["step"], 1);
        assert_eq!(json["semester"], 957_550);
        assert_eq!(json["vacation"], 1_915_100);
    }

    #[tokio::test]
    async fn test_pay_step_out_of_range() {
        let router = create_router(create_test_state());
        let request = Request::builder()
            .method("GET")
            .uri("/pay-steps/41")
            .body(Body::empty())
            .unwrap();

        let (status, json) = send(router, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "STEP_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_pay_step_not_a_number() {
        let router = create_router(create_test_state());
        let request = Request::builder()
            .method("GET")
            .uri("/pay-steps/abc")
            .body(Body::empty())
            .unwrap();

        let (status, json) = send(router, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}
