//! # Expense Record
//!
//! The flat entity owned by the record store. Field names on the wire are
//! camelCase except `ExpenseDate`, which the grid client sends PascalCase.

use serde::{Deserialize, Serialize};

/// Reimbursement workflow state for an expense.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReimbursementStatus {
    #[default]
    Submitted,
    #[serde(rename = "Under Review")]
    UnderReview,
    Approved,
    Paid,
    Rejected,
}

impl ReimbursementStatus {
    /// Get the wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ReimbursementStatus::Submitted => "Submitted",
            ReimbursementStatus::UnderReview => "Under Review",
            ReimbursementStatus::Approved => "Approved",
            ReimbursementStatus::Paid => "Paid",
            ReimbursementStatus::Rejected => "Rejected",
        }
    }
}

/// A single expense record.
///
/// `expense_id` is the unique key: immutable once assigned and unique across
/// the store. `tags` is an ordered, set-like list of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub expense_id: String,
    pub employee_name: String,
    pub employee_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_avatar_url: Option<String>,
    pub department: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: f64,
    pub tax_pct: f64,
    pub total_amount: f64,
    /// RFC 3339 timestamp string.
    #[serde(rename = "ExpenseDate")]
    pub expense_date: String,
    pub payment_method: String,
    pub currency: String,
    pub reimbursement_status: ReimbursementStatus,
    pub is_policy_compliant: bool,
    pub tags: Vec<String>,
}

impl ExpenseRecord {
    /// Returns the record key
    pub fn key(&self) -> &str {
        &self.expense_id
    }
}
