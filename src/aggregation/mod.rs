//! Aggregation logic for the Attendance Engine.
//!
//! This module contains the pure computations over attendance records:
//! the monthly summary (work days, total worked hours, paid-leave days)
//! and the remaining paid-leave balance.

mod leave_balance;
mod summarize;

pub use leave_balance::{LeaveBalance, leave_balance};
pub use summarize::summarize_month;
