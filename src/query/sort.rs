//! # Sort Comparator Chain
//!
//! Builds a single ordering from an ordered list of (field, direction)
//! entries. Comparison falls through to the next entry on ties; records that
//! compare equal on every entry keep their original relative order (the
//! caller sorts with a stable sort).

use std::cmp::Ordering;

use serde_json::Value;

use super::descriptor::{SortDirection, SortEntry};
use super::value::compare_values;

/// Compares record documents along a sort entry chain
pub struct SortComparator;

impl SortComparator {
    /// Compares two documents by the entry chain.
    ///
    /// Direction flips the sign per entry independently, so entries can mix
    /// ascending and descending.
    pub fn compare(a: &Value, b: &Value, entries: &[SortEntry]) -> Ordering {
        for entry in entries {
            let ordering = Self::compare_field(a.get(&entry.field), b.get(&entry.field));
            let ordering = match entry.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Compares a single field pair; missing sorts before present.
    fn compare_field(a: Option<&Value>, b: Option<&Value>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a_val), Some(b_val)) => {
                compare_values(a_val, b_val, false, false).unwrap_or(Ordering::Equal)
            }
        }
    }
}
