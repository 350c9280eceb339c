//! Request types for the Attendance Engine API.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, AttendanceStatus, ExpenseCategory, LeaveKind, LeaveRequest};

/// Query parameters for `GET /attendance/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryQuery {
    /// The external user identity to resolve.
    pub user_id: String,
    /// The target month in `YYYY-MM` form.
    pub month: String,
}

impl SummaryQuery {
    /// Parses the `month` parameter into a reference date (the first of
    /// the month).
    pub fn month_reference(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&format!("{}-01", self.month), "%Y-%m-%d").ok()
    }
}

/// Request body for `POST /attendance/records` (attendance correction).
///
/// Clock times are times of day combined with the record date, matching
/// the correction form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertRecordRequest {
    /// The external user identity to resolve.
    pub user_id: String,
    /// The calendar day being corrected.
    pub date: NaiveDate,
    /// Clock-in time of day, if recorded.
    #[serde(default)]
    pub clock_in: Option<NaiveTime>,
    /// Clock-out time of day, if recorded.
    #[serde(default)]
    pub clock_out: Option<NaiveTime>,
    /// Break duration string; the policy default applies when omitted.
    #[serde(default)]
    pub break_time: Option<String>,
    /// The attendance status for the day.
    pub status: AttendanceStatus,
}

impl UpsertRecordRequest {
    /// Builds the attendance record, substituting the policy's default
    /// break when none was supplied.
    pub fn into_record(self, default_break: &str) -> AttendanceRecord {
        AttendanceRecord {
            date: self.date,
            clock_in: self.clock_in.map(|t| self.date.and_time(t)),
            clock_out: self.clock_out.map(|t| self.date.and_time(t)),
            break_time: self.break_time.unwrap_or_else(|| default_break.to_string()),
            status: self.status,
        }
    }
}

/// Request body for `POST /leave/requests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestBody {
    /// The external user identity to resolve.
    pub user_id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The kind of leave requested.
    pub kind: LeaveKind,
    /// Reason for the request.
    pub reason: String,
}

impl From<LeaveRequestBody> for LeaveRequest {
    fn from(body: LeaveRequestBody) -> Self {
        LeaveRequest {
            start_date: body.start_date,
            end_date: body.end_date,
            kind: body.kind,
            reason: body.reason,
        }
    }
}

/// Query parameters for `GET /leave/balance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceQuery {
    /// The external user identity to resolve.
    pub user_id: String,
    /// The leave year to compute; defaults to the current year.
    #[serde(default)]
    pub year: Option<i32>,
}

/// Query parameters for `GET /expenses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseQuery {
    /// The external user identity to resolve.
    pub user_id: String,
    /// Case-insensitive filter over category and description.
    #[serde(default)]
    pub search: Option<String>,
}

/// Request body for `POST /expenses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRequest {
    /// The external user identity to resolve.
    pub user_id: String,
    /// The claimed amount.
    pub amount: Decimal,
    /// The expense category.
    pub category: ExpenseCategory,
    /// Free-form description of the expense.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_reference_parses_year_month() {
        let query = SummaryQuery {
            user_id: "auth_123".to_string(),
            month: "2025-04".to_string(),
        };
        assert_eq!(
            query.month_reference(),
            NaiveDate::from_ymd_opt(2025, 4, 1)
        );
    }

    #[test]
    fn test_month_reference_rejects_garbage() {
        let query = SummaryQuery {
            user_id: "auth_123".to_string(),
            month: "April 2025".to_string(),
        };
        assert_eq!(query.month_reference(), None);
    }

    #[test]
    fn test_into_record_combines_date_and_times() {
        let request = UpsertRecordRequest {
            user_id: "auth_123".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
            clock_in: NaiveTime::from_hms_opt(9, 0, 0),
            clock_out: NaiveTime::from_hms_opt(18, 0, 0),
            break_time: Some("01:00".to_string()),
            status: AttendanceStatus::NormalWork,
        };

        let record = request.into_record("01:00");
        assert_eq!(
            record.clock_in.unwrap().to_string(),
            "2025-04-15 09:00:00"
        );
        assert_eq!(
            record.clock_out.unwrap().to_string(),
            "2025-04-15 18:00:00"
        );
    }

    #[test]
    fn test_into_record_applies_default_break() {
        let request = UpsertRecordRequest {
            user_id: "auth_123".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
            clock_in: None,
            clock_out: None,
            break_time: None,
            status: AttendanceStatus::Absence,
        };

        let record = request.into_record("01:00");
        assert_eq!(record.break_time, "01:00");
    }

    #[test]
    fn test_deserialize_leave_request_body() {
        let json = r#"{
            "user_id": "auth_123",
            "start_date": "2025-04-10",
            "end_date": "2025-04-12",
            "kind": "paid_leave",
            "reason": "family trip"
        }"#;

        let body: LeaveRequestBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.kind, LeaveKind::PaidLeave);

        let request: LeaveRequest = body.into();
        assert_eq!(request.days(), 3);
    }

    #[test]
    fn test_deserialize_expense_request() {
        let json = r#"{
            "user_id": "auth_123",
            "amount": "1200",
            "category": "travel",
            "description": "client visit"
        }"#;

        let request: ExpenseRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.category, ExpenseCategory::Travel);
        assert_eq!(request.amount, Decimal::from(1200));
    }
}
