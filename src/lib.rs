//! expensedb - An in-memory expense record server with a grid-style query engine
//!
//! The core is the query-translation layer: serialized filter trees, full-text
//! search specs, multi-key sorts, and paging windows are executed against an
//! in-memory record store, and partial mutation payloads are reconciled
//! against existing records before any write.

pub mod api;
pub mod cli;
pub mod config;
pub mod model;
pub mod observability;
pub mod query;
pub mod store;
