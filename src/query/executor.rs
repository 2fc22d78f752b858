//! # Query Executor
//!
//! Drives one descriptor through the full pipeline: filter → search → sort →
//! count → page. Works on a borrowed snapshot of the record collection and
//! produces an owned result page.

use serde_json::Value;

use crate::model::ExpenseRecord;

use super::descriptor::QueryDescriptor;
use super::errors::QueryResult;
use super::eval::PredicateEvaluator;
use super::page::PageWindow;
use super::predicate::PredicateBuilder;
use super::search::{SearchMatcher, SearchSpec};
use super::sort::SortComparator;

/// Result of query execution: one page of records plus the post-filter,
/// pre-page total.
#[derive(Debug, Clone)]
pub struct ResultSet {
    pub result: Vec<ExpenseRecord>,
    pub count: usize,
}

/// Executes query descriptors against record snapshots
pub struct QueryExecutor;

impl QueryExecutor {
    /// Executes a descriptor against the given records.
    pub fn execute(records: &[ExpenseRecord], descriptor: &QueryDescriptor) -> QueryResult<ResultSet> {
        let filter = PredicateBuilder::from_arg(descriptor.where_clause.as_ref())?;
        let search = SearchSpec::from_arg(descriptor.search.as_ref())?;

        // Predicates, search, and sort all read the wire field names, so each
        // record is paired with its serialized document view for the request.
        let mut rows: Vec<(&ExpenseRecord, Value)> = records
            .iter()
            .map(|record| {
                let doc = serde_json::to_value(record).unwrap_or(Value::Null);
                (record, doc)
            })
            .collect();

        if let Some(tree) = &filter {
            rows.retain(|(_, doc)| PredicateEvaluator::matches(tree, doc));
        }
        if let Some(spec) = &search {
            rows.retain(|(_, doc)| SearchMatcher::matches(spec, doc));
        }
        if let Some(entries) = descriptor.sorted.as_deref().filter(|e| !e.is_empty()) {
            rows.sort_by(|(_, a), (_, b)| SortComparator::compare(a, b, entries));
        }

        let count = rows.len();
        let window = PageWindow::compute(count, descriptor.skip, descriptor.take);
        let result = rows[window.start..window.end]
            .iter()
            .map(|(record, _)| (*record).clone())
            .collect();

        Ok(ResultSet { result, count })
    }
}
