//! # Mutation Normalizer
//!
//! Reconciles a partial mutation payload into a complete, valid record
//! before persisting. Inserts fill absences with defaults and always mint a
//! fresh key; updates overlay payload fields onto the existing record.

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::model::{ExpensePayload, ExpenseRecord};

use super::errors::{StoreError, StoreResult};

/// Builds full records from partial mutation payloads
pub struct MutationNormalizer;

impl MutationNormalizer {
    /// Normalizes an insert payload into a complete record.
    ///
    /// Requires non-empty `employeeName` and `employeeEmail`. Explicit
    /// payload fields override defaults; the key is freshly generated and
    /// any caller-supplied key is ignored.
    pub fn insert(payload: &ExpensePayload) -> StoreResult<ExpenseRecord> {
        let employee_name = payload.employee_name.clone().unwrap_or_default();
        let employee_email = payload.employee_email.clone().unwrap_or_default();
        if employee_name.is_empty() || employee_email.is_empty() {
            return Err(StoreError::MissingIdentity);
        }

        Ok(ExpenseRecord {
            expense_id: Uuid::new_v4().to_string(),
            employee_name,
            employee_email,
            employee_avatar_url: payload.employee_avatar_url.clone(),
            department: payload.department.clone().unwrap_or_default(),
            category: payload.category.clone().unwrap_or_default(),
            description: payload.description.clone(),
            amount: payload.amount.unwrap_or(0.0),
            tax_pct: payload.tax_pct.unwrap_or(0.0),
            total_amount: payload.total_amount.unwrap_or(0.0),
            expense_date: payload.expense_date.clone().unwrap_or_else(now_rfc3339),
            payment_method: payload.payment_method.clone().unwrap_or_default(),
            currency: payload.currency.clone().unwrap_or_default(),
            reimbursement_status: payload.reimbursement_status.unwrap_or_default(),
            is_policy_compliant: payload.is_policy_compliant.unwrap_or(false),
            tags: payload.tags.clone().unwrap_or_default(),
        })
    }

    /// Overlays an update payload onto an existing record.
    ///
    /// Shallow per-field merge: every present payload field replaces the
    /// existing value, including the `tags` list wholesale. The key never
    /// changes.
    pub fn update(existing: &ExpenseRecord, payload: &ExpensePayload) -> ExpenseRecord {
        let mut merged = existing.clone();

        if let Some(v) = &payload.employee_name {
            merged.employee_name = v.clone();
        }
        if let Some(v) = &payload.employee_email {
            merged.employee_email = v.clone();
        }
        if let Some(v) = &payload.employee_avatar_url {
            merged.employee_avatar_url = Some(v.clone());
        }
        if let Some(v) = &payload.department {
            merged.department = v.clone();
        }
        if let Some(v) = &payload.category {
            merged.category = v.clone();
        }
        if let Some(v) = &payload.description {
            merged.description = Some(v.clone());
        }
        if let Some(v) = payload.amount {
            merged.amount = v;
        }
        if let Some(v) = payload.tax_pct {
            merged.tax_pct = v;
        }
        if let Some(v) = payload.total_amount {
            merged.total_amount = v;
        }
        if let Some(v) = &payload.expense_date {
            merged.expense_date = v.clone();
        }
        if let Some(v) = &payload.payment_method {
            merged.payment_method = v.clone();
        }
        if let Some(v) = &payload.currency {
            merged.currency = v.clone();
        }
        if let Some(v) = payload.reimbursement_status {
            merged.reimbursement_status = v;
        }
        if let Some(v) = payload.is_policy_compliant {
            merged.is_policy_compliant = v;
        }
        if let Some(v) = &payload.tags {
            merged.tags = v.clone();
        }

        merged
    }
}

/// Current UTC time in the wire timestamp format.
fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReimbursementStatus;

    fn insert_payload(name: Option<&str>, email: Option<&str>) -> ExpensePayload {
        ExpensePayload {
            employee_name: name.map(str::to_string),
            employee_email: email.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_insert_requires_identity_fields() {
        let missing_email = insert_payload(Some("Jane Smith"), None);
        assert_eq!(
            MutationNormalizer::insert(&missing_email),
            Err(StoreError::MissingIdentity)
        );

        let empty_name = insert_payload(Some(""), Some("jane@example.com"));
        assert_eq!(
            MutationNormalizer::insert(&empty_name),
            Err(StoreError::MissingIdentity)
        );
    }

    #[test]
    fn test_insert_fills_defaults() {
        let payload = insert_payload(Some("Jane Smith"), Some("jane@example.com"));
        let record = MutationNormalizer::insert(&payload).unwrap();

        assert_eq!(record.amount, 0.0);
        assert_eq!(record.department, "");
        assert_eq!(record.reimbursement_status, ReimbursementStatus::Submitted);
        assert!(!record.is_policy_compliant);
        assert!(record.tags.is_empty());
        // Default expense date is a parseable timestamp
        assert!(chrono::DateTime::parse_from_rfc3339(&record.expense_date).is_ok());
    }

    #[test]
    fn test_insert_ignores_caller_key() {
        let mut payload = insert_payload(Some("Jane Smith"), Some("jane@example.com"));
        payload.expense_id = Some("EXP-CHOSEN".to_string());

        let record = MutationNormalizer::insert(&payload).unwrap();
        assert_ne!(record.expense_id, "EXP-CHOSEN");
        assert!(!record.expense_id.is_empty());
    }

    #[test]
    fn test_insert_keys_are_unique() {
        let payload = insert_payload(Some("Jane Smith"), Some("jane@example.com"));
        let a = MutationNormalizer::insert(&payload).unwrap();
        let b = MutationNormalizer::insert(&payload).unwrap();
        assert_ne!(a.expense_id, b.expense_id);
    }

    #[test]
    fn test_update_merges_only_present_fields() {
        let payload = insert_payload(Some("Jane Smith"), Some("jane@example.com"));
        let mut existing = MutationNormalizer::insert(&payload).unwrap();
        existing.amount = 100.0;
        existing.tags = vec!["Urgent".to_string()];

        let update = ExpensePayload {
            amount: Some(500.0),
            ..Default::default()
        };
        let merged = MutationNormalizer::update(&existing, &update);

        assert_eq!(merged.amount, 500.0);
        assert_eq!(merged.tags, existing.tags);
        assert_eq!(merged.employee_name, existing.employee_name);
        assert_eq!(merged.expense_id, existing.expense_id);
    }

    #[test]
    fn test_update_replaces_tags_wholesale() {
        let payload = insert_payload(Some("Jane Smith"), Some("jane@example.com"));
        let mut existing = MutationNormalizer::insert(&payload).unwrap();
        existing.tags = vec!["Urgent".to_string(), "Recurring".to_string()];

        let update = ExpensePayload {
            tags: Some(vec!["Conference".to_string()]),
            ..Default::default()
        };
        let merged = MutationNormalizer::update(&existing, &update);
        assert_eq!(merged.tags, vec!["Conference".to_string()]);
    }

    #[test]
    fn test_update_never_changes_the_key() {
        let payload = insert_payload(Some("Jane Smith"), Some("jane@example.com"));
        let existing = MutationNormalizer::insert(&payload).unwrap();

        let update = ExpensePayload {
            expense_id: Some("EXP-OTHER".to_string()),
            ..Default::default()
        };
        let merged = MutationNormalizer::update(&existing, &update);
        assert_eq!(merged.expense_id, existing.expense_id);
    }
}
