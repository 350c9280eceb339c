//! Expense claim model and related types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of an expense claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    /// Commuting and business travel.
    Travel,
    /// Client entertainment.
    Entertainment,
    /// Office supplies and consumables.
    Supplies,
    /// Phone and network charges.
    Communication,
    /// Meeting costs.
    Meeting,
    /// Anything else.
    Other,
}

impl ExpenseCategory {
    /// Returns the engine's canonical label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Travel => "travel",
            Self::Entertainment => "entertainment",
            Self::Supplies => "supplies",
            Self::Communication => "communication",
            Self::Meeting => "meeting",
            Self::Other => "other",
        }
    }
}

/// Approval state of an expense claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    /// Submitted, awaiting approval.
    Pending,
    /// Approved.
    Approved,
    /// Rejected.
    Rejected,
}

/// A single expense claim submitted by an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseClaim {
    /// Unique identifier for the claim.
    pub id: Uuid,
    /// The claimed amount.
    pub amount: Decimal,
    /// The expense category.
    pub category: ExpenseCategory,
    /// Free-form description of the expense.
    pub description: String,
    /// Current approval state.
    pub status: ExpenseStatus,
    /// When the claim was submitted.
    pub created_at: DateTime<Utc>,
    /// When the claim was approved, if it has been.
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
}

impl ExpenseClaim {
    /// Creates a new pending claim with a fresh id.
    pub fn new(amount: Decimal, category: ExpenseCategory, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category,
            description,
            status: ExpenseStatus::Pending,
            created_at: Utc::now(),
            approved_at: None,
        }
    }

    /// Returns true if the claim matches a case-insensitive search term
    /// over its category label and description.
    ///
    /// An empty term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.category.label().contains(&term) || self.description.to_lowercase().contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(category: ExpenseCategory, description: &str) -> ExpenseClaim {
        ExpenseClaim::new(Decimal::new(1200, 0), category, description.to_string())
    }

    #[test]
    fn test_new_claim_starts_pending() {
        let claim = claim(ExpenseCategory::Travel, "client visit");
        assert_eq!(claim.status, ExpenseStatus::Pending);
        assert!(claim.approved_at.is_none());
    }

    #[test]
    fn test_search_matches_description_case_insensitively() {
        let claim = claim(ExpenseCategory::Other, "Taxi to Airport");
        assert!(claim.matches_search("taxi"));
        assert!(claim.matches_search("AIRPORT"));
        assert!(!claim.matches_search("hotel"));
    }

    #[test]
    fn test_search_matches_category_label() {
        let claim = claim(ExpenseCategory::Communication, "monthly phone bill");
        assert!(claim.matches_search("comm"));
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let claim = claim(ExpenseCategory::Meeting, "team lunch");
        assert!(claim.matches_search(""));
    }

    #[test]
    fn test_claim_serialization_round_trip() {
        let claim = claim(ExpenseCategory::Supplies, "notebooks");
        let json = serde_json::to_string(&claim).unwrap();
        let deserialized: ExpenseClaim = serde_json::from_str(&json).unwrap();
        assert_eq!(claim, deserialized);
    }
}
