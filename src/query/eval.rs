//! # Predicate Evaluator
//!
//! Evaluates a built predicate tree against a single record document.
//! Evaluation is infallible: every operator was validated at build time.

use serde_json::Value;

use super::predicate::{Condition, FilterOperator, PredicateNode};
use super::value::{compare_values, fold, stringify};

/// Evaluates predicate trees against record documents
pub struct PredicateEvaluator;

impl PredicateEvaluator {
    /// Checks if a document matches the predicate tree.
    pub fn matches(node: &PredicateNode, doc: &Value) -> bool {
        match node {
            PredicateNode::Composite {
                condition,
                children,
            } => {
                // Zero children means "no constraint", never false
                if children.is_empty() {
                    return true;
                }
                match condition {
                    // AND short-circuits on first false, OR on first true
                    Condition::And => children.iter().all(|c| Self::matches(c, doc)),
                    Condition::Or => children.iter().any(|c| Self::matches(c, doc)),
                }
            }
            PredicateNode::Leaf {
                field,
                operator,
                value,
                ignore_case,
                ignore_accent,
            } => Self::matches_leaf(doc, field, *operator, value, *ignore_case, *ignore_accent),
        }
    }

    fn matches_leaf(
        doc: &Value,
        field: &str,
        operator: FilterOperator,
        expected: &Value,
        ignore_case: bool,
        ignore_accent: bool,
    ) -> bool {
        let field_value = doc.get(field);

        // Null checks apply before the missing-field bailout
        match operator {
            FilterOperator::IsNull => {
                return field_value.map_or(true, Value::is_null);
            }
            FilterOperator::IsNotNull => {
                return field_value.map_or(false, |v| !v.is_null());
            }
            _ => {}
        }

        let actual = match field_value {
            Some(v) if !v.is_null() => v,
            // Missing or null field never satisfies a comparison
            _ => return false,
        };

        use std::cmp::Ordering::{Equal, Greater, Less};
        let cmp = || compare_values(actual, expected, ignore_case, ignore_accent);

        match operator {
            FilterOperator::Equal => matches!(cmp(), Some(Equal)),
            FilterOperator::NotEqual => !matches!(cmp(), Some(Equal)),
            FilterOperator::LessThan => matches!(cmp(), Some(Less)),
            FilterOperator::GreaterThan => matches!(cmp(), Some(Greater)),
            FilterOperator::LessThanOrEqual => matches!(cmp(), Some(Less | Equal)),
            FilterOperator::GreaterThanOrEqual => matches!(cmp(), Some(Greater | Equal)),
            FilterOperator::Contains
            | FilterOperator::StartsWith
            | FilterOperator::EndsWith => {
                Self::matches_string(actual, expected, operator, ignore_case, ignore_accent)
            }
            FilterOperator::IsNull | FilterOperator::IsNotNull => unreachable!("handled above"),
        }
    }

    fn matches_string(
        actual: &Value,
        expected: &Value,
        operator: FilterOperator,
        ignore_case: bool,
        ignore_accent: bool,
    ) -> bool {
        let (Some(haystack), Some(needle)) = (stringify(actual), stringify(expected)) else {
            return false;
        };
        let haystack = fold(&haystack, ignore_case, ignore_accent);
        let needle = fold(&needle, ignore_case, ignore_accent);

        match operator {
            FilterOperator::Contains => haystack.contains(&needle),
            FilterOperator::StartsWith => haystack.starts_with(&needle),
            FilterOperator::EndsWith => haystack.ends_with(&needle),
            _ => false,
        }
    }
}
