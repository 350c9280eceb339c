//! Record source contract and implementations.
//!
//! The aggregator's only boundary is its collaboration with a record
//! source: a store queried by employee identity and inclusive date range.
//! This module defines that contract, an in-memory implementation, and
//! the month-fetch coordinator that enforces the last-request-wins
//! discipline.

mod fetch;
mod memory;

use std::future::Future;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, Employee};

pub use fetch::{FetchOutcome, MonthFetcher, MonthView, load_month};
pub use memory::InMemorySource;

/// A store of employees and their daily attendance records.
///
/// "No employee found for this identity" is a distinct condition from an
/// empty record list; implementations signal it by returning `Ok(None)`
/// from [`RecordSource::find_employee`] so callers can surface a
/// configuration error instead of an empty summary. Transport and query
/// failures are reported as [`crate::error::EngineError::FetchFailed`].
pub trait RecordSource {
    /// Resolves the employee belonging to an external user identity.
    fn find_employee(
        &self,
        user_id: &str,
    ) -> impl Future<Output = EngineResult<Option<Employee>>> + Send;

    /// Returns the employee's records with dates in `[from, to]`,
    /// inclusive on both ends, in arbitrary order.
    fn records_in_range(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Future<Output = EngineResult<Vec<AttendanceRecord>>> + Send;

    /// Inserts or replaces the employee's record for the record's date.
    fn upsert_record(
        &self,
        employee_id: &str,
        record: AttendanceRecord,
    ) -> impl Future<Output = EngineResult<()>> + Send;
}
