//! # Record Store
//!
//! Owns the authoritative ordered collection of expense records and the
//! uniqueness invariant on record keys. Mutation payloads are normalized
//! (defaults on insert, field-level merge on update) before any write, and
//! every locate-then-mutate sequence runs under a single lock.

mod errors;
mod normalize;
mod seed;
mod store;

pub use errors::{StoreError, StoreResult};
pub use normalize::MutationNormalizer;
pub use seed::generate_expenses;
pub use store::ExpenseStore;
