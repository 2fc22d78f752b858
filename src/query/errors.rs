//! # Query Engine Errors
//!
//! Malformed descriptor fragments are never errors (they are recovered by
//! dropping the clause); only operator names the engine does not implement
//! fail a request, since silently matching everything would return wrong
//! result sets.

use thiserror::Error;

/// Result type for query engine operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Query engine errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Filter leaf carries an operator name the evaluator does not implement
    #[error("Unsupported filter operator: {0}")]
    UnsupportedOperator(String),

    /// Search spec carries an operator name the matcher does not implement
    #[error("Unsupported search operator: {0}")]
    UnsupportedSearchOperator(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_operator() {
        let err = QueryError::UnsupportedOperator("regex".to_string());
        assert!(err.to_string().contains("regex"));

        let err = QueryError::UnsupportedSearchOperator("fuzzy".to_string());
        assert!(err.to_string().contains("fuzzy"));
    }
}
