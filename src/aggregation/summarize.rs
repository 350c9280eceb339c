//! Monthly summary aggregation.
//!
//! This module provides the function that turns one employee's daily
//! attendance records for a calendar month into summary statistics.

use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, AttendanceStatus, HOURS_PER_LEAVE_DAY, MonthlySummary};

/// Aggregates a month's attendance records into a [`MonthlySummary`].
///
/// The input is expected to be restricted to a single employee and a
/// single calendar month; ordering is irrelevant. Each qualifying record
/// (normal work with both clock times) adds one work day and its worked
/// hours; each paid-leave record credits a fixed 8-hour equivalent.
///
/// The paid-leave check is evaluated independently of the qualifying
/// predicate. A record can never satisfy both, since the status set is
/// closed, but keeping the checks independent means a paid-leave record
/// with stray clock fields still counts as leave and never as work.
///
/// The function never fails: malformed fields degrade to zero
/// contributions and no I/O is performed.
///
/// # Examples
///
/// ```
/// use attendance_engine::aggregation::summarize_month;
/// use attendance_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let records = vec![AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
///     clock_in: None,
///     clock_out: None,
///     break_time: "00:00".to_string(),
///     status: AttendanceStatus::PaidLeave,
/// }];
///
/// let summary = summarize_month(&records);
/// assert_eq!(summary.work_days, 0);
/// assert_eq!(summary.leave_days(), Decimal::ONE);
/// ```
pub fn summarize_month(records: &[AttendanceRecord]) -> MonthlySummary {
    let mut summary = MonthlySummary::empty();

    for record in records {
        if let Some(hours) = record.worked_hours() {
            summary.work_days += 1;
            summary.total_hours += hours;
        }

        if record.status == AttendanceStatus::PaidLeave {
            summary.leave_hours += Decimal::from(HOURS_PER_LEAVE_DAY);
        }
    }

    summary
}
