//! # Expense Data Model
//!
//! Wire-shaped record types shared by the store, the query engine, and the
//! HTTP API.

pub mod lookups;
pub mod payload;
pub mod record;

pub use payload::ExpensePayload;
pub use record::{ExpenseRecord, ReimbursementStatus};
