//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance_record;
mod employee;
mod expense_claim;
mod leave_request;
mod month_window;
mod monthly_summary;

pub use attendance_record::{AttendanceRecord, AttendanceStatus};
pub use employee::Employee;
pub use expense_claim::{ExpenseCategory, ExpenseClaim, ExpenseStatus};
pub use leave_request::{LeaveKind, LeaveRequest};
pub use month_window::MonthWindow;
pub use monthly_summary::{MonthlySummary, HOURS_PER_LEAVE_DAY};
