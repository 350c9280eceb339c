//! HTTP API module for the Attendance Engine.
//!
//! This module provides the REST endpoints for monthly attendance
//! summaries, attendance corrections, leave requests, expense claims,
//! and client preferences.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BalanceQuery, ExpenseQuery, ExpenseRequest, LeaveRequestBody, SummaryQuery,
    UpsertRecordRequest,
};
pub use response::{
    ApiError, ExpenseListResponse, LeaveBalanceResponse, LeaveRequestResponse,
    MonthlySummaryResponse,
};
pub use state::AppState;
