//! # Predicate Tree
//!
//! Tagged-union AST for filter clauses and the validating builder that
//! constructs it from loosely-typed client input.
//!
//! The builder fails closed on shape: a node that is neither a well-formed
//! composite nor a leaf with a field name contributes nothing, and a fully
//! malformed clause yields "no filter" rather than an error. Operator names
//! the engine does not implement do fail the request.

use serde_json::Value;

use super::descriptor::parse_arg;
use super::errors::{QueryError, QueryResult};

/// Comparison operators supported by filter leaves (grid wire names).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    Contains,
    StartsWith,
    EndsWith,
    IsNull,
    IsNotNull,
}

impl FilterOperator {
    /// Parses a wire operator name.
    pub fn parse(name: &str) -> QueryResult<Self> {
        match name.to_lowercase().as_str() {
            "equal" => Ok(FilterOperator::Equal),
            "notequal" => Ok(FilterOperator::NotEqual),
            "lessthan" => Ok(FilterOperator::LessThan),
            "greaterthan" => Ok(FilterOperator::GreaterThan),
            "lessthanorequal" => Ok(FilterOperator::LessThanOrEqual),
            "greaterthanorequal" => Ok(FilterOperator::GreaterThanOrEqual),
            "contains" => Ok(FilterOperator::Contains),
            "startswith" => Ok(FilterOperator::StartsWith),
            "endswith" => Ok(FilterOperator::EndsWith),
            "isnull" => Ok(FilterOperator::IsNull),
            "isnotnull" => Ok(FilterOperator::IsNotNull),
            other => Err(QueryError::UnsupportedOperator(other.to_string())),
        }
    }

    /// Get the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Equal => "equal",
            FilterOperator::NotEqual => "notequal",
            FilterOperator::LessThan => "lessthan",
            FilterOperator::GreaterThan => "greaterthan",
            FilterOperator::LessThanOrEqual => "lessthanorequal",
            FilterOperator::GreaterThanOrEqual => "greaterthanorequal",
            FilterOperator::Contains => "contains",
            FilterOperator::StartsWith => "startswith",
            FilterOperator::EndsWith => "endswith",
            FilterOperator::IsNull => "isnull",
            FilterOperator::IsNotNull => "isnotnull",
        }
    }
}

/// Boolean connective of a composite node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    And,
    Or,
}

/// A node in the predicate tree.
#[derive(Debug, Clone, PartialEq)]
pub enum PredicateNode {
    /// Single field comparison
    Leaf {
        field: String,
        operator: FilterOperator,
        value: Value,
        ignore_case: bool,
        ignore_accent: bool,
    },
    /// AND/OR over child predicates. Each composite applies only its own
    /// condition to its own children, so nested composites at different
    /// levels can carry different conditions.
    Composite {
        condition: Condition,
        children: Vec<PredicateNode>,
    },
}

impl PredicateNode {
    /// Convenience constructor for a leaf with default sensitivity.
    pub fn leaf(field: impl Into<String>, operator: FilterOperator, value: Value) -> Self {
        PredicateNode::Leaf {
            field: field.into(),
            operator,
            value,
            ignore_case: false,
            ignore_accent: false,
        }
    }
}

/// Builds predicate trees from serialized filter clauses.
pub struct PredicateBuilder;

impl PredicateBuilder {
    /// Builds the root predicate from a `where` argument.
    ///
    /// The argument may be double-serialized (a JSON string); after decoding
    /// it is expected to be a list whose first element is the root node
    /// descriptor. Any other shape yields "no filter".
    pub fn from_arg(arg: Option<&Value>) -> QueryResult<Option<PredicateNode>> {
        let decoded = match parse_arg(arg) {
            Some(v) => v,
            None => return Ok(None),
        };
        match decoded.as_array().and_then(|items| items.first()) {
            Some(root) => Self::build(root),
            None => Ok(None),
        }
    }

    /// Builds a single node recursively.
    pub fn build(node: &Value) -> QueryResult<Option<PredicateNode>> {
        let is_complex = node
            .get("isComplex")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        if is_complex {
            if let Some(Value::Array(predicates)) = node.get("predicates") {
                let mut children = Vec::with_capacity(predicates.len());
                for child in predicates {
                    if let Some(built) = Self::build(child)? {
                        children.push(built);
                    }
                }

                return Ok(match children.len() {
                    0 => None,
                    // A single surviving child reduces to that child directly
                    1 => children.pop(),
                    _ => Some(PredicateNode::Composite {
                        condition: Self::parse_condition(node),
                        children,
                    }),
                });
            }
            return Ok(None);
        }

        if let Some(field) = node.get("field").and_then(Value::as_str) {
            let operator = match node.get("operator").and_then(Value::as_str) {
                Some(name) => FilterOperator::parse(name)?,
                None => FilterOperator::Equal,
            };
            return Ok(Some(PredicateNode::Leaf {
                field: field.to_string(),
                operator,
                value: node.get("value").cloned().unwrap_or(Value::Null),
                ignore_case: node
                    .get("ignoreCase")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
                ignore_accent: node
                    .get("ignoreAccent")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
            }));
        }

        // Neither composite nor leaf: contributes nothing
        Ok(None)
    }

    fn parse_condition(node: &Value) -> Condition {
        match node.get("condition").and_then(Value::as_str) {
            Some(c) if c.eq_ignore_ascii_case("or") => Condition::Or,
            _ => Condition::And,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_leaf() {
        let node = json!({
            "field": "department",
            "operator": "equal",
            "value": "Finance",
            "ignoreCase": true
        });

        let built = PredicateBuilder::build(&node).unwrap().unwrap();
        match built {
            PredicateNode::Leaf {
                field,
                operator,
                value,
                ignore_case,
                ignore_accent,
            } => {
                assert_eq!(field, "department");
                assert_eq!(operator, FilterOperator::Equal);
                assert_eq!(value, json!("Finance"));
                assert!(ignore_case);
                assert!(!ignore_accent);
            }
            other => panic!("expected leaf, got {:?}", other),
        }
    }

    #[test]
    fn test_build_composite_keeps_own_condition() {
        let node = json!({
            "isComplex": true,
            "condition": "or",
            "predicates": [
                {"field": "amount", "operator": "greaterthan", "value": 100},
                {
                    "isComplex": true,
                    "condition": "and",
                    "predicates": [
                        {"field": "department", "operator": "equal", "value": "Sales"},
                        {"field": "isPolicyCompliant", "operator": "equal", "value": true}
                    ]
                }
            ]
        });

        let built = PredicateBuilder::build(&node).unwrap().unwrap();
        match built {
            PredicateNode::Composite {
                condition,
                children,
            } => {
                assert_eq!(condition, Condition::Or);
                assert_eq!(children.len(), 2);
                match &children[1] {
                    PredicateNode::Composite { condition, .. } => {
                        assert_eq!(*condition, Condition::And)
                    }
                    other => panic!("expected nested composite, got {:?}", other),
                }
            }
            other => panic!("expected composite, got {:?}", other),
        }
    }

    #[test]
    fn test_single_surviving_child_reduces_to_leaf() {
        let node = json!({
            "isComplex": true,
            "condition": "and",
            "predicates": [
                {"field": "amount", "operator": "lessthan", "value": 50},
                {"note": "no field, drops out"}
            ]
        });

        let built = PredicateBuilder::build(&node).unwrap().unwrap();
        assert!(matches!(built, PredicateNode::Leaf { .. }));
    }

    #[test]
    fn test_empty_composite_contributes_nothing() {
        let node = json!({"isComplex": true, "condition": "and", "predicates": []});
        assert_eq!(PredicateBuilder::build(&node).unwrap(), None);
    }

    #[test]
    fn test_malformed_shapes_yield_no_filter() {
        assert_eq!(PredicateBuilder::from_arg(None).unwrap(), None);
        assert_eq!(PredicateBuilder::from_arg(Some(&json!([]))).unwrap(), None);
        assert_eq!(
            PredicateBuilder::from_arg(Some(&json!("garbage"))).unwrap(),
            None
        );
        assert_eq!(PredicateBuilder::build(&json!({"other": 1})).unwrap(), None);
    }

    #[test]
    fn test_unknown_operator_is_an_error() {
        let node = json!({"field": "amount", "operator": "regex", "value": ".*"});
        assert_eq!(
            PredicateBuilder::build(&node),
            Err(QueryError::UnsupportedOperator("regex".to_string()))
        );
    }

    #[test]
    fn test_operator_wire_names_round_trip() {
        for name in [
            "equal",
            "notequal",
            "lessthan",
            "greaterthan",
            "lessthanorequal",
            "greaterthanorequal",
            "contains",
            "startswith",
            "endswith",
            "isnull",
            "isnotnull",
        ] {
            let op = FilterOperator::parse(name).unwrap();
            assert_eq!(op.as_str(), name);
        }
    }
}
