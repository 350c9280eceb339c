//! In-memory record source.
//!
//! Backs the HTTP surface and the test suite. Attendance rows are keyed
//! by employee and date, matching the at-most-one-record-per-date rule of
//! the external store.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, Employee, ExpenseClaim};

use super::RecordSource;

#[derive(Debug, Default)]
struct State {
    employees: Vec<Employee>,
    // employee id -> date -> record
    records: HashMap<String, BTreeMap<NaiveDate, AttendanceRecord>>,
    expenses: HashMap<String, Vec<ExpenseClaim>>,
}

/// A shared in-memory record source.
///
/// Cloning is cheap; all clones see the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    state: Arc<RwLock<State>>,
}

impl InMemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee.
    pub async fn add_employee(&self, employee: Employee) {
        self.state.write().await.employees.push(employee);
    }

    /// Appends an expense claim for the employee.
    pub async fn add_expense(&self, employee_id: &str, claim: ExpenseClaim) {
        self.state
            .write()
            .await
            .expenses
            .entry(employee_id.to_string())
            .or_default()
            .push(claim);
    }

    /// Returns the employee's expense claims, newest first.
    pub async fn expenses_for(&self, employee_id: &str) -> Vec<ExpenseClaim> {
        let state = self.state.read().await;
        let mut claims = state
            .expenses
            .get(employee_id)
            .cloned()
            .unwrap_or_default();
        claims.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        claims
    }
}

impl RecordSource for InMemorySource {
    async fn find_employee(&self, user_id: &str) -> EngineResult<Option<Employee>> {
        let state = self.state.read().await;
        Ok(state
            .employees
            .iter()
            .find(|employee| employee.user_id == user_id)
            .cloned())
    }

    async fn records_in_range(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let state = self.state.read().await;
        let records = state
            .records
            .get(employee_id)
            .map(|by_date| by_date.range(from..=to).map(|(_, r)| r.clone()).collect())
            .unwrap_or_default();
        Ok(records)
    }

    async fn upsert_record(&self, employee_id: &str, record: AttendanceRecord) -> EngineResult<()> {
        self.state
            .write()
            .await
            .records
            .entry(employee_id.to_string())
            .or_default()
            .insert(record.date, record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employee(id: &str, user_id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            user_id: user_id.to_string(),
            employee_code: "E0001".to_string(),
            name: "Sato Yuki".to_string(),
            email: "yuki.sato@example.com".to_string(),
            department: None,
            position: None,
            hire_date: date(2020, 4, 1),
        }
    }

    fn record(d: NaiveDate, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            date: d,
            clock_in: None,
            clock_out: None,
            break_time: "00:00".to_string(),
            status,
        }
    }

    #[tokio::test]
    async fn test_find_employee_by_user_id() {
        let source = InMemorySource::new();
        source.add_employee(employee("emp_001", "auth_123")).await;

        let found = source.find_employee("auth_123").await.unwrap();
        assert_eq!(found.unwrap().id, "emp_001");

        let missing = source.find_employee("auth_999").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_range_query_is_inclusive_on_both_ends() {
        let source = InMemorySource::new();
        for day in [date(2025, 3, 31), date(2025, 4, 1), date(2025, 4, 30), date(2025, 5, 1)] {
            source
                .upsert_record("emp_001", record(day, AttendanceStatus::NormalWork))
                .await
                .unwrap();
        }

        let records = source
            .records_in_range("emp_001", date(2025, 4, 1), date(2025, 4, 30))
            .await
            .unwrap();
        let dates: Vec<_> = records.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2025, 4, 1), date(2025, 4, 30)]);
    }

    #[tokio::test]
    async fn test_upsert_replaces_record_for_same_date() {
        let source = InMemorySource::new();
        let day = date(2025, 4, 10);

        source
            .upsert_record("emp_001", record(day, AttendanceStatus::NormalWork))
            .await
            .unwrap();
        source
            .upsert_record("emp_001", record(day, AttendanceStatus::PaidLeave))
            .await
            .unwrap();

        let records = source
            .records_in_range("emp_001", day, day)
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, AttendanceStatus::PaidLeave);
    }

    #[tokio::test]
    async fn test_expenses_are_listed_newest_first() {
        use crate::models::ExpenseCategory;
        use rust_decimal::Decimal;

        let source = InMemorySource::new();
        let older = ExpenseClaim {
            created_at: chrono::Utc::now() - chrono::Duration::hours(2),
            ..ExpenseClaim::new(Decimal::from(500), ExpenseCategory::Travel, "bus".to_string())
        };
        let newer = ExpenseClaim::new(
            Decimal::from(900),
            ExpenseCategory::Meeting,
            "lunch".to_string(),
        );

        source.add_expense("emp_001", older.clone()).await;
        source.add_expense("emp_001", newer.clone()).await;

        let claims = source.expenses_for("emp_001").await;
        assert_eq!(claims[0].id, newer.id);
        assert_eq!(claims[1].id, older.id);
    }
}
