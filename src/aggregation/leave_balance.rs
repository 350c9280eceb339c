//! Remaining paid-leave balance.
//!
//! The original system displayed a hard-coded placeholder here; this
//! module computes the balance from the records instead: the configured
//! annual allowance minus the paid-leave days already recorded in the
//! year to date.

use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, AttendanceStatus};

/// An employee's paid-leave balance at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveBalance {
    /// Days granted for the year.
    pub allowance_days: Decimal,
    /// Paid-leave days already recorded.
    pub taken_days: Decimal,
}

impl LeaveBalance {
    /// Returns the remaining days, which go negative when overdrawn.
    pub fn remaining_days(&self) -> Decimal {
        self.allowance_days - self.taken_days
    }
}

/// Computes the paid-leave balance from the records of the current
/// leave year.
///
/// Every record with status [`AttendanceStatus::PaidLeave`] consumes one
/// day; all other statuses are ignored.
pub fn leave_balance(allowance_days: u32, records: &[AttendanceRecord]) -> LeaveBalance {
    let taken = records
        .iter()
        .filter(|record| record.status == AttendanceStatus::PaidLeave)
        .count();

    LeaveBalance {
        allowance_days: Decimal::from(allowance_days),
        taken_days: Decimal::from(taken as u64),
    }
}
