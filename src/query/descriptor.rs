//! # Query Descriptor
//!
//! The serialized request describing filter, search, sort, and paging
//! constraints for one read. All fields are optional; absence means "no
//! constraint". The grid client double-serializes `where` and `search`, so
//! both may arrive as JSON strings and are decoded leniently.

use serde::Deserialize;
use serde_json::Value;

/// Sort direction for a single sort entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

/// One entry of the sort comparator chain; list order defines tie-break
/// precedence (the first entry is the primary key).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SortEntry {
    /// Field to sort by (wire name: `name`)
    #[serde(rename = "name")]
    pub field: String,
    pub direction: SortDirection,
}

impl SortEntry {
    /// Ascending sort on a field
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on a field
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// A grid query descriptor as consumed from the transport boundary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryDescriptor {
    /// Serialized predicate-tree list
    #[serde(rename = "where", default)]
    pub where_clause: Option<Value>,

    /// Serialized one-element list of `{key, fields, operator, ignoreCase}`
    #[serde(default)]
    pub search: Option<Value>,

    /// Ordered sort entries
    #[serde(default)]
    pub sorted: Option<Vec<SortEntry>>,

    /// Paging window offset
    #[serde(default)]
    pub skip: Option<usize>,

    /// Paging window size
    #[serde(default)]
    pub take: Option<usize>,
}

/// Decodes a possibly double-serialized descriptor fragment.
///
/// A string argument is parsed as JSON; unparseable input yields `None`
/// (the clause is dropped, mirroring permissive client input).
pub(crate) fn parse_arg(arg: Option<&Value>) -> Option<Value> {
    match arg {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => serde_json::from_str(s).ok(),
        Some(v) => Some(v.clone()),
    }
}
