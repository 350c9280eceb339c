//! Month-fetch coordination.
//!
//! One asynchronous fetch is issued per month change, and a newer fetch
//! supersedes any older one still in flight: when an older fetch resolves
//! after a newer one has started, its result (success or failure) is
//! discarded so that displayed state always reflects the most recently
//! requested month. There is no cancellation primitive and no retry.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;

use crate::aggregation::summarize_month;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, MonthWindow, MonthlySummary};

use super::RecordSource;

/// The records and summary loaded for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthView {
    /// The month that was fetched.
    pub window: MonthWindow,
    /// The raw records, in date order as returned by the source.
    pub records: Vec<AttendanceRecord>,
    /// The aggregated summary.
    pub summary: MonthlySummary,
}

/// The outcome of a month fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The fetch completed and is still the most recent request.
    Loaded(MonthView),
    /// A newer fetch started before this one resolved; the result was
    /// discarded.
    Superseded,
}

/// Issues month fetches against a record source, last-request-wins.
#[derive(Debug)]
pub struct MonthFetcher<S> {
    source: S,
    generation: AtomicU64,
}

impl<S: RecordSource> MonthFetcher<S> {
    /// Creates a fetcher over the given source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            generation: AtomicU64::new(0),
        }
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches and aggregates the month containing `reference` for the
    /// given user identity.
    ///
    /// Returns [`FetchOutcome::Superseded`] when a newer fetch was started
    /// before this one resolved; errors from superseded fetches are
    /// discarded the same way as results.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmployeeNotFound`] when the identity does
    /// not resolve to an employee, or whatever the source reports for a
    /// failed query.
    pub async fn fetch_month(&self, user_id: &str, reference: NaiveDate) -> EngineResult<FetchOutcome> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let window = MonthWindow::containing(reference);

        let result = load_window(&self.source, user_id, window).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            return Ok(FetchOutcome::Superseded);
        }

        result.map(FetchOutcome::Loaded)
    }
}

/// Loads and aggregates the month containing `reference`, without the
/// supersession check. This is the single-shot path used by servers that
/// answer each request independently.
///
/// # Errors
///
/// Returns [`EngineError::EmployeeNotFound`] when the identity does not
/// resolve to an employee, or whatever the source reports for a failed
/// query.
pub async fn load_month<S: RecordSource>(
    source: &S,
    user_id: &str,
    reference: NaiveDate,
) -> EngineResult<MonthView> {
    load_window(source, user_id, MonthWindow::containing(reference)).await
}

async fn load_window<S: RecordSource>(
    source: &S,
    user_id: &str,
    window: MonthWindow,
) -> EngineResult<MonthView> {
    let employee = source
        .find_employee(user_id)
        .await?
        .ok_or_else(|| EngineError::EmployeeNotFound {
            user_id: user_id.to_string(),
        })?;

    let records = source
        .records_in_range(&employee.id, window.first_day, window.last_day)
        .await?;

    let summary = summarize_month(&records);

    Ok(MonthView {
        window,
        records,
        summary,
    })
}
