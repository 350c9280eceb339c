//! Monthly summary model.
//!
//! This module defines the MonthlySummary struct produced by the
//! attendance aggregator. A summary is derived, never persisted: it is
//! always a pure projection of the current record set.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed hour equivalent credited for one paid-leave day.
pub const HOURS_PER_LEAVE_DAY: u32 = 8;

/// Summary statistics for one employee's attendance over one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Count of qualifying normal-work records.
    pub work_days: u32,
    /// Sum of worked hours over qualifying records, unrounded.
    pub total_hours: Decimal,
    /// Accumulated paid-leave hours (8 per paid-leave record).
    pub leave_hours: Decimal,
}

impl MonthlySummary {
    /// Returns an empty summary.
    pub fn empty() -> Self {
        Self {
            work_days: 0,
            total_hours: Decimal::ZERO,
            leave_hours: Decimal::ZERO,
        }
    }

    /// Returns the paid-leave days, exactly `leave_hours / 8`.
    pub fn leave_days(&self) -> Decimal {
        self.leave_hours / Decimal::from(HOURS_PER_LEAVE_DAY)
    }

    /// Returns the total worked hours rounded to one decimal digit.
    ///
    /// This is the display value; [`MonthlySummary::total_hours`] remains
    /// the unrounded value of record for any further computation.
    pub fn display_hours(&self) -> Decimal {
        self.total_hours.round_dp(1)
    }
}

impl Default for MonthlySummary {
    fn default() -> Self {
        Self::empty()
    }
}
