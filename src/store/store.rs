//! # Expense Store
//!
//! Sole owner of record lifetime. Reads take a cloned snapshot; mutations
//! run their full locate-then-mutate sequence under one lock so concurrent
//! request handlers never observe partial writes.

use std::sync::{Mutex, MutexGuard};

use crate::model::{ExpensePayload, ExpenseRecord};

use super::errors::{StoreError, StoreResult};
use super::normalize::MutationNormalizer;

/// The authoritative ordered collection of expense records.
pub struct ExpenseStore {
    records: Mutex<Vec<ExpenseRecord>>,
}

impl ExpenseStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Creates a store seeded with the given records
    pub fn with_records(records: Vec<ExpenseRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Records hold no invariants beyond what each completed mutation left
    /// behind, so a poisoned lock is safe to recover.
    fn guard(&self) -> MutexGuard<'_, Vec<ExpenseRecord>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot view of the full collection for read queries.
    pub fn list(&self) -> Vec<ExpenseRecord> {
        self.guard().clone()
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// Returns true if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    /// Returns the record under `key`, if any.
    pub fn get(&self, key: &str) -> Option<ExpenseRecord> {
        self.guard().iter().find(|r| r.expense_id == key).cloned()
    }

    /// Appends a record, enforcing key uniqueness.
    pub fn insert(&self, record: ExpenseRecord) -> StoreResult<()> {
        let mut records = self.guard();
        if records.iter().any(|r| r.expense_id == record.expense_id) {
            return Err(StoreError::DuplicateKey(record.expense_id));
        }
        records.push(record);
        Ok(())
    }

    /// Replaces the record under `key` wholesale.
    pub fn replace(&self, key: &str, record: ExpenseRecord) -> StoreResult<ExpenseRecord> {
        let mut records = self.guard();
        match records.iter_mut().find(|r| r.expense_id == key) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }

    /// Merges an update payload into the record under `key`.
    ///
    /// Locate, normalize, and write happen under one lock acquisition.
    pub fn update(&self, key: &str, payload: &ExpensePayload) -> StoreResult<ExpenseRecord> {
        let mut records = self.guard();
        match records.iter_mut().find(|r| r.expense_id == key) {
            Some(slot) => {
                let merged = MutationNormalizer::update(slot, payload);
                *slot = merged.clone();
                Ok(merged)
            }
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }

    /// Removes the record under `key`.
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        let mut records = self.guard();
        match records.iter().position(|r| r.expense_id == key) {
            Some(index) => {
                records.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}
