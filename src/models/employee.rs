//! Employee model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents an employee row resolved from the record source.
///
/// Employees are looked up by the external identity provider's user id;
/// attendance and expense rows reference the employee's own id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The external identity this employee belongs to.
    pub user_id: String,
    /// Internal employee code (e.g. "E0042").
    pub employee_code: String,
    /// The employee's display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Department the employee belongs to.
    #[serde(default)]
    pub department: Option<String>,
    /// Job title or position.
    #[serde(default)]
    pub position: Option<String>,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_deserialization_with_optional_fields_absent() {
        let json = r#"{
            "id": "emp_001",
            "user_id": "auth_123",
            "employee_code": "E0042",
            "name": "Sato Yuki",
            "email": "yuki.sato@example.com",
            "hire_date": "2020-04-01"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.employee_code, "E0042");
        assert_eq!(employee.department, None);
        assert_eq!(employee.position, None);
    }

    #[test]
    fn test_employee_serialization_round_trip() {
        let employee = Employee {
            id: "emp_001".to_string(),
            user_id: "auth_123".to_string(),
            employee_code: "E0042".to_string(),
            name: "Sato Yuki".to_string(),
            email: "yuki.sato@example.com".to_string(),
            department: Some("Engineering".to_string()),
            position: Some("Developer".to_string()),
            hire_date: NaiveDate::from_ymd_opt(2020, 4, 1).unwrap(),
        };

        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }
}
