//! Attendance record model and related types.
//!
//! This module defines the AttendanceRecord struct and AttendanceStatus enum
//! for representing one employee's attendance on one calendar day.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the attendance outcome recorded for a single day.
///
/// The record source stores these as string labels; the engine models them
/// as a closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// A standard work day with clock-in and clock-out recorded.
    NormalWork,
    /// A paid-leave day, credited as a fixed 8-hour equivalent.
    PaidLeave,
    /// An unpaid absence for the entire day.
    Absence,
    /// Employee arrived late.
    Late,
    /// Employee left before the end of the day.
    EarlyLeave,
}

impl AttendanceStatus {
    /// Parses a status from a stored label.
    ///
    /// Accepts both the engine's snake_case labels and the legacy labels
    /// used by the original attendance table.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::AttendanceStatus;
    ///
    /// assert_eq!(
    ///     AttendanceStatus::from_label("normal_work"),
    ///     Some(AttendanceStatus::NormalWork)
    /// );
    /// assert_eq!(
    ///     AttendanceStatus::from_label("有給休暇"),
    ///     Some(AttendanceStatus::PaidLeave)
    /// );
    /// assert_eq!(AttendanceStatus::from_label("unknown"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "normal_work" | "通常勤務" => Some(Self::NormalWork),
            "paid_leave" | "有給休暇" => Some(Self::PaidLeave),
            "absence" | "欠勤" => Some(Self::Absence),
            "late" | "遅刻" => Some(Self::Late),
            "early_leave" | "早退" => Some(Self::EarlyLeave),
            _ => None,
        }
    }

    /// Returns the engine's canonical label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NormalWork => "normal_work",
            Self::PaidLeave => "paid_leave",
            Self::Absence => "absence",
            Self::Late => "late",
            Self::EarlyLeave => "early_leave",
        }
    }
}

/// Represents one employee's attendance on one calendar day.
///
/// There is at most one record per employee per date; the date is the
/// record's key within an employee's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The calendar day the record tracks.
    pub date: NaiveDate,
    /// Timestamp when the employee clocked in, if any.
    pub clock_in: Option<NaiveDateTime>,
    /// Timestamp when the employee clocked out, if any.
    pub clock_out: Option<NaiveDateTime>,
    /// Break duration as a duration-of-day string (e.g. "01:00").
    #[serde(default)]
    pub break_time: String,
    /// The attendance outcome for the day.
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Returns true if this record qualifies for worked-hours computation.
    ///
    /// A record qualifies when its status is [`AttendanceStatus::NormalWork`]
    /// and both clock-in and clock-out are present. Records failing this
    /// predicate contribute zero worked hours regardless of other fields.
    pub fn is_qualifying(&self) -> bool {
        self.status == AttendanceStatus::NormalWork
            && self.clock_in.is_some()
            && self.clock_out.is_some()
    }

    /// Returns the break duration in fractional hours.
    ///
    /// A non-parseable break value degrades to zero rather than failing;
    /// malformed fields are never surfaced to the caller.
    pub fn break_hours(&self) -> Decimal {
        parse_break_hours(&self.break_time)
    }

    /// Calculates the worked hours for this record.
    ///
    /// Returns `Some((clock_out - clock_in) - break)` in fractional hours
    /// for qualifying records, and `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::{AttendanceRecord, AttendanceStatus};
    /// use chrono::{NaiveDate, NaiveDateTime};
    /// use rust_decimal::Decimal;
    ///
    /// let record = AttendanceRecord {
    ///     date: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
    ///     clock_in: NaiveDateTime::parse_from_str("2025-04-15 09:00:00", "%Y-%m-%d %H:%M:%S").ok(),
    ///     clock_out: NaiveDateTime::parse_from_str("2025-04-15 18:00:00", "%Y-%m-%d %H:%M:%S").ok(),
    ///     break_time: "01:00".to_string(),
    ///     status: AttendanceStatus::NormalWork,
    /// };
    /// assert_eq!(record.worked_hours(), Some(Decimal::new(80, 1))); // 8.0 hours
    /// ```
    pub fn worked_hours(&self) -> Option<Decimal> {
        if self.status != AttendanceStatus::NormalWork {
            return None;
        }
        let clock_in = self.clock_in?;
        let clock_out = self.clock_out?;

        let worked_seconds = (clock_out - clock_in).num_seconds();
        let gross_hours = Decimal::from(worked_seconds) / Decimal::from(3600);

        Some(gross_hours - self.break_hours())
    }
}

/// Parses a duration-of-day string ("HH:MM" or "HH:MM:SS") into hours.
///
/// Anything that does not parse yields `Decimal::ZERO`.
fn parse_break_hours(value: &str) -> Decimal {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return Decimal::ZERO;
    }

    let mut numbers = Vec::with_capacity(parts.len());
    for part in &parts {
        match part.trim().parse::<u32>() {
            Ok(n) => numbers.push(n),
            Err(_) => return Decimal::ZERO,
        }
    }

    let minutes = numbers[1];
    let seconds = numbers.get(2).copied().unwrap_or(0);
    if minutes >= 60 || seconds >= 60 {
        return Decimal::ZERO;
    }

    Decimal::from(numbers[0])
        + Decimal::from(minutes) / Decimal::from(60)
        + Decimal::from(seconds) / Decimal::from(3600)
}
