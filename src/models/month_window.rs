//! Calendar month window model.
//!
//! This module defines the MonthWindow struct used to select the inclusive
//! date range [first day, last day] of a calendar month.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive calendar-month date window.
///
/// Containment is a timezone-naive date comparison, which avoids off-by-one
/// inclusion errors at month boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWindow {
    /// The first calendar day of the month.
    pub first_day: NaiveDate,
    /// The last calendar day of the month.
    pub last_day: NaiveDate,
}

impl MonthWindow {
    /// Returns the month window containing the given reference date.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::MonthWindow;
    /// use chrono::NaiveDate;
    ///
    /// let window = MonthWindow::containing(NaiveDate::from_ymd_opt(2025, 4, 15).unwrap());
    /// assert_eq!(window.first_day, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
    /// assert_eq!(window.last_day, NaiveDate::from_ymd_opt(2025, 4, 30).unwrap());
    /// ```
    pub fn containing(reference: NaiveDate) -> Self {
        let first_day = reference.with_day(1).expect("day 1 exists in every month");
        let last_day = first_day + Months::new(1) - Days::new(1);
        Self {
            first_day,
            last_day,
        }
    }

    /// Returns true if the given date falls inside the window, inclusive
    /// on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day <= date && date <= self.last_day
    }

    /// Returns the window for the following month.
    pub fn next(&self) -> Self {
        Self::containing(self.first_day + Months::new(1))
    }

    /// Returns the window for the preceding month.
    pub fn previous(&self) -> Self {
        Self::containing(self.first_day - Months::new(1))
    }

    /// Returns the year of the month this window covers.
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// Returns the month number (1-12) this window covers.
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }
}
