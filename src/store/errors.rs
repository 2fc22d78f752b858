//! # Record Store Errors
//!
//! All store errors are per-request client failures; none corrupt the
//! store's invariants (key uniqueness, completeness of required fields).

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Insert payload is missing a required identity field
    #[error("employeeName and employeeEmail are required")]
    MissingIdentity,

    /// No record exists under the given key
    #[error("Expense not found: {0}")]
    NotFound(String),

    /// Insert would violate key uniqueness
    #[error("Duplicate expense key: {0}")]
    DuplicateKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_key() {
        let err = StoreError::NotFound("EXP123".to_string());
        assert!(err.to_string().contains("EXP123"));
    }
}
