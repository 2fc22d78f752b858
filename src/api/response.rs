//! # Response Formatting
//!
//! Standard response types for the HTTP API.

use serde::Serialize;

use crate::model::ExpenseRecord;
use crate::query::ResultSet;

/// Query response: one page of records plus the post-filter total.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub result: Vec<ExpenseRecord>,
    pub count: usize,
}

impl From<ResultSet> for QueryResponse {
    fn from(set: ResultSet) -> Self {
        Self {
            result: set.result,
            count: set.count,
        }
    }
}

/// Insert response carrying the freshly generated key.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub expense_id: String,
}

impl InsertResponse {
    pub fn new(expense_id: impl Into<String>) -> Self {
        Self {
            expense_id: expense_id.into(),
        }
    }
}

/// Delete response
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

impl DeleteResponse {
    pub fn success() -> Self {
        Self { deleted: true }
    }
}
