//! # Query Engine
//!
//! Executes a grid query descriptor against an in-memory record collection.
//!
//! # Execution Flow (strict order)
//!
//! 1. Build the predicate tree from the serialized `where` clause
//! 2. Build the search spec from the serialized `search` clause
//! 3. Filter the full collection with the predicate tree
//! 4. Filter the survivors with the search matcher
//! 5. Apply the sort comparator chain (stable)
//! 6. Capture the post-filter count
//! 7. Apply the paging window
//!
//! Malformed `where`/`search` fragments are recovered locally (the clause is
//! dropped); unrecognized operator names fail the request.

mod descriptor;
mod errors;
mod eval;
mod executor;
mod page;
mod predicate;
mod search;
mod sort;
mod value;

pub use descriptor::{QueryDescriptor, SortDirection, SortEntry};
pub use errors::{QueryError, QueryResult};
pub use eval::PredicateEvaluator;
pub use executor::{QueryExecutor, ResultSet};
pub use page::PageWindow;
pub use predicate::{Condition, FilterOperator, PredicateBuilder, PredicateNode};
pub use search::{SearchMatcher, SearchOperator, SearchSpec};
pub use sort::SortComparator;
