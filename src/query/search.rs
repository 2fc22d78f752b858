//! # Search Matcher
//!
//! Full-text search over a list of record fields. A record matches when any
//! listed field matches the search key (logical OR across fields).

use serde_json::Value;

use super::descriptor::parse_arg;
use super::errors::{QueryError, QueryResult};
use super::value::{fold, stringify};

/// String operators supported by the search matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOperator {
    Contains,
    StartsWith,
    EndsWith,
    Equal,
}

impl SearchOperator {
    /// Parses a wire operator name; absent defaults to `contains`.
    pub fn parse(name: Option<&str>) -> QueryResult<Self> {
        match name {
            None => Ok(SearchOperator::Contains),
            Some(name) => match name.to_lowercase().as_str() {
                "contains" => Ok(SearchOperator::Contains),
                "startswith" => Ok(SearchOperator::StartsWith),
                "endswith" => Ok(SearchOperator::EndsWith),
                "equal" => Ok(SearchOperator::Equal),
                other => Err(QueryError::UnsupportedSearchOperator(other.to_string())),
            },
        }
    }
}

/// A parsed full-text search spec.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSpec {
    pub key: String,
    pub fields: Vec<String>,
    pub operator: SearchOperator,
    pub ignore_case: bool,
}

impl SearchSpec {
    /// Builds a search spec from a parsed `search` argument.
    ///
    /// The argument is expected to be a list whose first element carries
    /// `{key, fields, operator, ignoreCase}`; a missing key or empty field
    /// list yields "no search" (treated as success, not error).
    pub fn from_arg(arg: Option<&Value>) -> QueryResult<Option<SearchSpec>> {
        let decoded = match parse_arg(arg) {
            Some(v) => v,
            None => return Ok(None),
        };
        let spec = match decoded.as_array().and_then(|items| items.first()) {
            Some(spec) => spec,
            None => return Ok(None),
        };

        let key = match spec.get("key").and_then(Value::as_str) {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => return Ok(None),
        };
        let fields: Vec<String> = match spec.get("fields").and_then(Value::as_array) {
            Some(fields) => fields
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            None => return Ok(None),
        };
        if fields.is_empty() {
            return Ok(None);
        }

        Ok(Some(SearchSpec {
            key,
            fields,
            operator: SearchOperator::parse(spec.get("operator").and_then(Value::as_str))?,
            ignore_case: spec
                .get("ignoreCase")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }))
    }
}

/// Evaluates search specs against record documents
pub struct SearchMatcher;

impl SearchMatcher {
    /// Checks if any listed field of the document matches the search key.
    pub fn matches(spec: &SearchSpec, doc: &Value) -> bool {
        let needle = fold(&spec.key, spec.ignore_case, false);

        spec.fields.iter().any(|field| {
            let Some(haystack) = doc.get(field).and_then(|v| stringify(v)) else {
                return false;
            };
            let haystack = fold(&haystack, spec.ignore_case, false);
            match spec.operator {
                SearchOperator::Contains => haystack.contains(&needle),
                SearchOperator::StartsWith => haystack.starts_with(&needle),
                SearchOperator::EndsWith => haystack.ends_with(&needle),
                SearchOperator::Equal => haystack == needle,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec(key: &str, fields: &[&str], ignore_case: bool) -> SearchSpec {
        SearchSpec {
            key: key.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
            operator: SearchOperator::Contains,
            ignore_case,
        }
    }

    #[test]
    fn test_any_field_matches() {
        let doc = json!({"employeeName": "Mia Clark", "department": "Finance"});

        let s = spec("Financ", &["employeeName", "department"], false);
        assert!(SearchMatcher::matches(&s, &doc));

        let s = spec("Financ", &["employeeName"], false);
        assert!(!SearchMatcher::matches(&s, &doc));
    }

    #[test]
    fn test_case_insensitive_search() {
        let doc = json!({"department": "FINANCE"});

        let s = spec("financ", &["department"], true);
        assert!(SearchMatcher::matches(&s, &doc));

        let s = spec("financ", &["department"], false);
        assert!(!SearchMatcher::matches(&s, &doc));
    }

    #[test]
    fn test_numbers_are_stringified() {
        let doc = json!({"amount": 1250.75});
        let s = spec("250.7", &["amount"], false);
        assert!(SearchMatcher::matches(&s, &doc));
    }

    #[test]
    fn test_from_arg_double_serialized() {
        let arg = json!(
            "[{\"key\":\"urgent\",\"fields\":[\"tags\",\"description\"],\"operator\":\"contains\",\"ignoreCase\":true}]"
        );
        let parsed = SearchSpec::from_arg(Some(&arg)).unwrap().unwrap();
        assert_eq!(parsed.key, "urgent");
        assert_eq!(parsed.fields, vec!["tags", "description"]);
        assert_eq!(parsed.operator, SearchOperator::Contains);
        assert!(parsed.ignore_case);
    }

    #[test]
    fn test_from_arg_missing_key_or_fields_is_no_search() {
        let no_key = json!([{"fields": ["department"]}]);
        assert_eq!(SearchSpec::from_arg(Some(&no_key)).unwrap(), None);

        let empty_fields = json!([{"key": "x", "fields": []}]);
        assert_eq!(SearchSpec::from_arg(Some(&empty_fields)).unwrap(), None);

        assert_eq!(SearchSpec::from_arg(None).unwrap(), None);
    }

    #[test]
    fn test_from_arg_unknown_operator_is_an_error() {
        let arg = json!([{"key": "x", "fields": ["department"], "operator": "fuzzy"}]);
        assert_eq!(
            SearchSpec::from_arg(Some(&arg)),
            Err(QueryError::UnsupportedSearchOperator("fuzzy".to_string()))
        );
    }

    #[test]
    fn test_default_operator_is_contains() {
        let arg = json!([{"key": "x", "fields": ["department"]}]);
        let parsed = SearchSpec::from_arg(Some(&arg)).unwrap().unwrap();
        assert_eq!(parsed.operator, SearchOperator::Contains);
    }
}
