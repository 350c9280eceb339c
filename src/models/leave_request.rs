//! Leave request model and related types.
//!
//! A leave request covers an inclusive date range and expands into one
//! attendance record per calendar day when submitted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus};

/// Break value written on records created from a leave request.
const LEAVE_BREAK_TIME: &str = "00:00";

/// The kind of leave being requested.
///
/// The attendance status set is closed, so a request can only produce
/// statuses that exist in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveKind {
    /// Paid leave, credited as a fixed 8-hour equivalent per day.
    PaidLeave,
    /// Unpaid absence.
    Absence,
}

impl LeaveKind {
    /// Returns the attendance status written on records for this kind.
    pub fn status(&self) -> AttendanceStatus {
        match self {
            Self::PaidLeave => AttendanceStatus::PaidLeave,
            Self::Absence => AttendanceStatus::Absence,
        }
    }
}

/// A request for leave over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The kind of leave requested.
    pub kind: LeaveKind,
    /// Reason for the request.
    pub reason: String,
}

impl LeaveRequest {
    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidLeaveRequest`] when the end date is
    /// before the start date or the reason is empty.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidLeaveRequest {
                message: "end date before start date".to_string(),
            });
        }
        if self.reason.trim().is_empty() {
            return Err(EngineError::InvalidLeaveRequest {
                message: "reason must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the number of calendar days covered, inclusive on both ends.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Expands the request into one attendance record per covered day.
    ///
    /// Each record carries the request's status, no clock times, and a
    /// zero break. The request is validated first.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidLeaveRequest`] when validation fails.
    pub fn expand(&self) -> EngineResult<Vec<AttendanceRecord>> {
        self.validate()?;

        let records = self
            .start_date
            .iter_days()
            .take_while(|date| *date <= self.end_date)
            .map(|date| AttendanceRecord {
                date,
                clock_in: None,
                clock_out: None,
                break_time: LEAVE_BREAK_TIME.to_string(),
                status: self.kind.status(),
            })
            .collect();

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn paid_leave(start: NaiveDate, end: NaiveDate) -> LeaveRequest {
        LeaveRequest {
            start_date: start,
            end_date: end,
            kind: LeaveKind::PaidLeave,
            reason: "family trip".to_string(),
        }
    }

    #[test]
    fn test_single_day_request_expands_to_one_record() {
        let request = paid_leave(date(2025, 4, 10), date(2025, 4, 10));
        let records = request.expand().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, date(2025, 4, 10));
        assert_eq!(records[0].status, AttendanceStatus::PaidLeave);
        assert_eq!(records[0].break_time, "00:00");
        assert!(records[0].clock_in.is_none());
        assert!(records[0].clock_out.is_none());
    }

    #[test]
    fn test_multi_day_request_expands_inclusively() {
        let request = paid_leave(date(2025, 4, 10), date(2025, 4, 14));
        assert_eq!(request.days(), 5);

        let records = request.expand().unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records.first().unwrap().date, date(2025, 4, 10));
        assert_eq!(records.last().unwrap().date, date(2025, 4, 14));
    }

    #[test]
    fn test_request_spanning_month_boundary() {
        let request = paid_leave(date(2025, 4, 29), date(2025, 5, 2));
        let records = request.expand().unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[1].date, date(2025, 4, 30));
        assert_eq!(records[2].date, date(2025, 5, 1));
    }

    #[test]
    fn test_absence_kind_produces_absence_status() {
        let request = LeaveRequest {
            kind: LeaveKind::Absence,
            ..paid_leave(date(2025, 4, 10), date(2025, 4, 10))
        };
        let records = request.expand().unwrap();
        assert_eq!(records[0].status, AttendanceStatus::Absence);
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let request = paid_leave(date(2025, 4, 14), date(2025, 4, 10));
        let error = request.expand().unwrap_err();
        assert!(error.to_string().contains("end date before start date"));
    }

    #[test]
    fn test_empty_reason_is_rejected() {
        let request = LeaveRequest {
            reason: "   ".to_string(),
            ..paid_leave(date(2025, 4, 10), date(2025, 4, 10))
        };
        assert!(request.validate().is_err());
    }
}
