//! # Mutation Payload
//!
//! A partial expense record as received from mutation requests. Every field
//! is optional; the normalizer decides how absences are filled (defaults on
//! insert, existing values on update).

use serde::Deserialize;

use super::record::ReimbursementStatus;

/// Partial record payload for insert and update mutations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePayload {
    /// Ignored on insert (keys are always freshly generated) and immutable
    /// on update.
    pub expense_id: Option<String>,
    pub employee_name: Option<String>,
    pub employee_email: Option<String>,
    pub employee_avatar_url: Option<String>,
    pub department: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub tax_pct: Option<f64>,
    pub total_amount: Option<f64>,
    #[serde(rename = "ExpenseDate")]
    pub expense_date: Option<String>,
    pub payment_method: Option<String>,
    pub currency: Option<String>,
    pub reimbursement_status: Option<ReimbursementStatus>,
    pub is_policy_compliant: Option<bool>,
    /// When present the tags list replaces the existing one wholesale;
    /// tag lists are never merged element-wise.
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_payload_deserializes() {
        let payload: ExpensePayload = serde_json::from_value(json!({
            "amount": 500.0,
            "reimbursementStatus": "Approved"
        }))
        .unwrap();

        assert_eq!(payload.amount, Some(500.0));
        assert_eq!(
            payload.reimbursement_status,
            Some(ReimbursementStatus::Approved)
        );
        assert!(payload.employee_name.is_none());
        assert!(payload.tags.is_none());
    }

    #[test]
    fn test_expense_date_wire_name() {
        let payload: ExpensePayload =
            serde_json::from_value(json!({"ExpenseDate": "2026-06-01T00:00:00.000Z"})).unwrap();
        assert_eq!(
            payload.expense_date.as_deref(),
            Some("2026-06-01T00:00:00.000Z")
        );
    }
}
