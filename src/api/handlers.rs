//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregation::leave_balance;
use crate::config::Preferences;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, ExpenseClaim, LeaveRequest};
use crate::source::{RecordSource, load_month};

use super::request::{
    BalanceQuery, ExpenseQuery, ExpenseRequest, LeaveRequestBody, SummaryQuery,
    UpsertRecordRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, ExpenseListResponse, LeaveBalanceResponse, LeaveRequestResponse,
    MonthlySummaryResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/summary", get(summary_handler))
        .route("/attendance/records", post(upsert_record_handler))
        .route("/leave/requests", post(leave_request_handler))
        .route("/leave/balance", get(leave_balance_handler))
        .route(
            "/expenses",
            get(list_expenses_handler).post(submit_expense_handler),
        )
        .route(
            "/preferences",
            get(get_preferences_handler).put(put_preferences_handler),
        )
        .with_state(state)
}

fn error_response(status: StatusCode, error: ApiError) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error_response(error: EngineError) -> Response {
    let response: ApiErrorResponse = error.into();
    error_response(response.status, response.error)
}

fn rejection_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn query_error(rejection: QueryRejection) -> ApiError {
    ApiError::validation_error(rejection.body_text())
}

async fn resolve_employee(state: &AppState, user_id: &str) -> EngineResult<Employee> {
    state
        .source()
        .find_employee(user_id)
        .await?
        .ok_or_else(|| EngineError::EmployeeNotFound {
            user_id: user_id.to_string(),
        })
}

/// Handler for GET /attendance/summary.
///
/// Resolves the employee, fetches the month's records, and returns the
/// aggregated summary together with the raw records.
async fn summary_handler(
    State(state): State<AppState>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, query_error(rejection));
        }
    };

    let Some(reference) = query.month_reference() else {
        warn!(correlation_id = %correlation_id, month = %query.month, "Unparseable month parameter");
        return error_response(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error(format!("month must be YYYY-MM, got '{}'", query.month)),
        );
    };

    match load_month(state.source(), &query.user_id, reference).await {
        Ok(view) => {
            info!(
                correlation_id = %correlation_id,
                month = %format!("{:04}-{:02}", view.window.year(), view.window.month()),
                work_days = view.summary.work_days,
                "Monthly summary computed"
            );
            Json(MonthlySummaryResponse::from(view)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Summary fetch failed");
            engine_error_response(err)
        }
    }
}

/// Handler for POST /attendance/records (attendance correction).
async fn upsert_record_handler(
    State(state): State<AppState>,
    payload: Result<Json<UpsertRecordRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, rejection_error(rejection));
        }
    };

    let employee = match resolve_employee(&state, &request.user_id).await {
        Ok(employee) => employee,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Employee lookup failed");
            return engine_error_response(err);
        }
    };

    let default_break = state.config().policy().attendance.default_break.clone();
    let record = request.into_record(&default_break);
    let date = record.date;

    if let Err(err) = state.source().upsert_record(&employee.id, record.clone()).await {
        warn!(correlation_id = %correlation_id, error = %err, "Record upsert failed");
        return engine_error_response(err);
    }

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        date = %date,
        "Attendance record stored"
    );
    Json(record).into_response()
}

/// Handler for POST /leave/requests.
///
/// Expands the request into one attendance record per covered day and
/// reports the remaining paid-leave balance.
async fn leave_request_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveRequestBody>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Json(body) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, rejection_error(rejection));
        }
    };

    let user_id = body.user_id.clone();
    let request: LeaveRequest = body.into();

    let records = match request.expand() {
        Ok(records) => records,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Leave request rejected");
            return engine_error_response(err);
        }
    };

    let employee = match resolve_employee(&state, &user_id).await {
        Ok(employee) => employee,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Employee lookup failed");
            return engine_error_response(err);
        }
    };

    for record in records {
        if let Err(err) = state.source().upsert_record(&employee.id, record).await {
            warn!(correlation_id = %correlation_id, error = %err, "Leave record upsert failed");
            return engine_error_response(err);
        }
    }

    let balance = match year_balance(&state, &employee, request.start_date.year()).await {
        Ok(balance) => balance,
        Err(err) => return engine_error_response(err),
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        days = request.days(),
        remaining = %balance,
        "Leave request stored"
    );
    Json(LeaveRequestResponse {
        days_created: request.days(),
        remaining_days: balance,
    })
    .into_response()
}

/// Handler for GET /leave/balance.
async fn leave_balance_handler(
    State(state): State<AppState>,
    query: Result<Query<BalanceQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, query_error(rejection));
        }
    };

    let year = query.year.unwrap_or_else(|| Utc::now().year());

    let employee = match resolve_employee(&state, &query.user_id).await {
        Ok(employee) => employee,
        Err(err) => return engine_error_response(err),
    };

    let allowance = state.config().policy().leave.annual_allowance_days;
    let records = match year_records(&state, &employee, year).await {
        Ok(records) => records,
        Err(err) => return engine_error_response(err),
    };
    let balance = leave_balance(allowance, &records);

    Json(LeaveBalanceResponse {
        year,
        allowance_days: balance.allowance_days,
        taken_days: balance.taken_days,
        remaining_days: balance.remaining_days(),
    })
    .into_response()
}

/// Handler for GET /expenses.
async fn list_expenses_handler(
    State(state): State<AppState>,
    query: Result<Query<ExpenseQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, query_error(rejection));
        }
    };

    let employee = match resolve_employee(&state, &query.user_id).await {
        Ok(employee) => employee,
        Err(err) => return engine_error_response(err),
    };

    let mut expenses = state.source().expenses_for(&employee.id).await;
    if let Some(term) = &query.search {
        expenses.retain(|claim| claim.matches_search(term));
    }

    Json(ExpenseListResponse { expenses }).into_response()
}

/// Handler for POST /expenses.
async fn submit_expense_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExpenseRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, rejection_error(rejection));
        }
    };

    if request.amount <= Decimal::ZERO {
        return engine_error_response(EngineError::InvalidExpense {
            field: "amount".to_string(),
            message: "must be positive".to_string(),
        });
    }

    let employee = match resolve_employee(&state, &request.user_id).await {
        Ok(employee) => employee,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Employee lookup failed");
            return engine_error_response(err);
        }
    };

    let claim = ExpenseClaim::new(request.amount, request.category, request.description);
    state.source().add_expense(&employee.id, claim.clone()).await;

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        amount = %claim.amount,
        "Expense claim submitted"
    );
    (StatusCode::CREATED, Json(claim)).into_response()
}

/// Handler for GET /preferences.
async fn get_preferences_handler(State(state): State<AppState>) -> Response {
    Json(state.preferences().get()).into_response()
}

/// Handler for PUT /preferences.
async fn put_preferences_handler(
    State(state): State<AppState>,
    payload: Result<Json<Preferences>, JsonRejection>,
) -> Response {
    let Json(preferences) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, rejection_error(rejection));
        }
    };

    if let Err(err) = state.preferences().set(preferences) {
        warn!(error = %err, "Preference update failed");
        return engine_error_response(err);
    }

    Json(preferences).into_response()
}

async fn year_records(
    state: &AppState,
    employee: &Employee,
    year: i32,
) -> EngineResult<Vec<crate::models::AttendanceRecord>> {
    let from = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(EngineError::FetchFailed {
        message: format!("invalid year {}", year),
    })?;
    let to = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(EngineError::FetchFailed {
        message: format!("invalid year {}", year),
    })?;
    state.source().records_in_range(&employee.id, from, to).await
}

async fn year_balance(state: &AppState, employee: &Employee, year: i32) -> EngineResult<Decimal> {
    let allowance = state.config().policy().leave.annual_allowance_days;
    let records = year_records(state, employee, year).await?;
    Ok(leave_balance(allowance, &records).remaining_days())
}
