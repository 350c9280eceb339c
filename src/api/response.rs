//! Response types for the Attendance Engine API.
//!
//! This module defines the success payloads, the error response
//! structure, and the mapping from engine errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{AttendanceRecord, ExpenseClaim};
use crate::source::MonthView;

/// Response body for `GET /attendance/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySummaryResponse {
    /// The summarized month in `YYYY-MM` form.
    pub month: String,
    /// Count of qualifying work days.
    pub work_days: u32,
    /// Total worked hours, rounded to one decimal digit for display.
    pub total_hours: Decimal,
    /// Paid-leave days credited within the month.
    pub leave_days: Decimal,
    /// The underlying daily records.
    pub records: Vec<AttendanceRecord>,
}

impl From<MonthView> for MonthlySummaryResponse {
    fn from(view: MonthView) -> Self {
        Self {
            month: format!("{:04}-{:02}", view.window.year(), view.window.month()),
            work_days: view.summary.work_days,
            total_hours: view.summary.display_hours(),
            leave_days: view.summary.leave_days(),
            records: view.records,
        }
    }
}

/// Response body for `POST /leave/requests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestResponse {
    /// Number of attendance records created or replaced.
    pub days_created: i64,
    /// Remaining paid-leave days after this request.
    pub remaining_days: Decimal,
}

/// Response body for `GET /leave/balance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveBalanceResponse {
    /// The leave year the balance covers.
    pub year: i32,
    /// Days granted for the year.
    pub allowance_days: Decimal,
    /// Paid-leave days already recorded.
    pub taken_days: Decimal,
    /// Remaining days; negative when overdrawn.
    pub remaining_days: Decimal,
}

/// Response body for `GET /expenses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseListResponse {
    /// Matching claims, newest first.
    pub expenses: Vec<ExpenseClaim>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::EmployeeNotFound { user_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "EMPLOYEE_NOT_FOUND",
                    format!("No employee record found for user '{}'", user_id),
                    "The user identity is not linked to an employee row; this is a \
                     configuration problem, not an empty month",
                ),
            },
            EngineError::FetchFailed { message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "FETCH_FAILED",
                    "Failed to retrieve records",
                    message,
                ),
            },
            EngineError::InvalidLeaveRequest { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_LEAVE_REQUEST", format!("Invalid leave request: {}", message)),
            },
            EngineError::InvalidExpense { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_EXPENSE",
                    format!("Invalid expense claim field '{}': {}", field, message),
                    "The expense claim contains invalid information",
                ),
            },
            EngineError::StorageError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORAGE_ERROR",
                    "Failed to access client storage",
                    format!("{}: {}", path, message),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MonthWindow, MonthlySummary};
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_employee_not_found_maps_to_404() {
        let error = EngineError::EmployeeNotFound {
            user_id: "auth_123".to_string(),
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "EMPLOYEE_NOT_FOUND");
        assert!(response.error.message.contains("auth_123"));
    }

    #[test]
    fn test_fetch_failed_maps_to_502() {
        let error = EngineError::FetchFailed {
            message: "timeout".to_string(),
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::BAD_GATEWAY);
        assert_eq!(response.error.code, "FETCH_FAILED");
    }

    #[test]
    fn test_invalid_leave_request_maps_to_400() {
        let error = EngineError::InvalidLeaveRequest {
            message: "end date before start date".to_string(),
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_summary_response_rounds_display_hours() {
        let view = MonthView {
            window: MonthWindow::containing(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()),
            records: vec![],
            summary: MonthlySummary {
                work_days: 3,
                total_hours: Decimal::new(22250, 3), // 22.250
                leave_hours: Decimal::from(8),
            },
        };

        let response = MonthlySummaryResponse::from(view);
        assert_eq!(response.month, "2025-04");
        assert_eq!(response.total_hours, Decimal::new(222, 1)); // 22.2
        assert_eq!(response.leave_days, Decimal::ONE);
    }
}
