//! Synthetic expense data for the demo grid.
//!
//! Generates records over the previous three full calendar months so the
//! grid always opens onto a populated reporting window.

use chrono::{Datelike, Days, Months, NaiveDate, TimeZone, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::lookups::{
    CATEGORIES, CATEGORY_DESCRIPTIONS, CURRENCIES, DEPARTMENTS, FIRST_NAMES, LAST_NAMES,
    PAYMENT_METHODS, TAG_OPTIONS,
};
use crate::model::{ExpenseRecord, ReimbursementStatus};

const STATUSES: &[ReimbursementStatus] = &[
    ReimbursementStatus::Submitted,
    ReimbursementStatus::UnderReview,
    ReimbursementStatus::Approved,
    ReimbursementStatus::Paid,
    ReimbursementStatus::Rejected,
];

/// Generates `count` synthetic expense records.
pub fn generate_expenses(count: usize) -> Vec<ExpenseRecord> {
    let mut rng = rand::thread_rng();
    let (start, end) = reporting_window();

    (0..count)
        .map(|idx| {
            let first = pick(&mut rng, FIRST_NAMES);
            let last = pick(&mut rng, LAST_NAMES);
            let amount = round2(rng.gen_range(40.0..2000.0));
            let tax_pct = round4(rng.gen_range(0.02..0.12));
            let category_idx = rng.gen_range(0..CATEGORIES.len());

            ExpenseRecord {
                expense_id: format!("EXP{}", 202400 + idx),
                employee_name: format!("{} {}", first, last),
                employee_email: format!("{}.{}@example.com", first, last).to_lowercase(),
                employee_avatar_url: None,
                department: pick(&mut rng, DEPARTMENTS).to_string(),
                category: CATEGORIES[category_idx].to_string(),
                description: Some(pick(&mut rng, CATEGORY_DESCRIPTIONS[category_idx]).to_string()),
                amount,
                tax_pct,
                total_amount: round2(amount * (1.0 + tax_pct)),
                expense_date: random_date_in_range(&mut rng, start, end),
                payment_method: pick(&mut rng, PAYMENT_METHODS).to_string(),
                currency: pick(&mut rng, CURRENCIES).to_string(),
                reimbursement_status: *STATUSES.choose(&mut rng).unwrap_or(&STATUSES[0]),
                is_policy_compliant: rng.gen_bool(0.8),
                tags: random_tags(&mut rng),
            }
        })
        .collect()
}

/// Start/end dates covering the previous three full months.
fn reporting_window() -> (NaiveDate, NaiveDate) {
    let today = Utc::now().date_naive();
    let first_of_month = today.with_day(1).unwrap_or(today);
    let start = first_of_month - Months::new(3);
    let end = first_of_month - Days::new(1);
    (start, end)
}

/// A random UTC midnight in the supplied inclusive range.
fn random_date_in_range(rng: &mut impl Rng, start: NaiveDate, end: NaiveDate) -> String {
    let total_days = (end - start).num_days().max(0);
    let offset = rng.gen_range(0..=total_days);
    let date = start + Days::new(offset as u64);
    let midnight = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    Utc.from_utc_datetime(&midnight)
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

fn random_tags(rng: &mut impl Rng) -> Vec<String> {
    let mut options: Vec<&str> = TAG_OPTIONS.to_vec();
    options.shuffle(rng);
    let mut tags: Vec<String> = options
        .into_iter()
        .take(rng.gen_range(0..3))
        .map(str::to_string)
        .collect();
    tags.sort();
    tags
}

fn pick<'a>(rng: &mut impl Rng, list: &[&'a str]) -> &'a str {
    list.choose(rng).copied().unwrap_or("")
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generates_requested_count_with_unique_keys() {
        let records = generate_expenses(200);
        assert_eq!(records.len(), 200);

        let keys: HashSet<&str> = records.iter().map(|r| r.expense_id.as_str()).collect();
        assert_eq!(keys.len(), 200);
    }

    #[test]
    fn test_totals_include_tax() {
        for record in generate_expenses(50) {
            let expected = round2(record.amount * (1.0 + record.tax_pct));
            assert!((record.total_amount - expected).abs() < 1e-9);
            assert!(record.amount >= 40.0 && record.amount <= 2000.0);
            assert!(record.tax_pct >= 0.02 && record.tax_pct <= 0.12);
        }
    }

    #[test]
    fn test_dates_fall_in_reporting_window() {
        let (start, end) = reporting_window();
        for record in generate_expenses(50) {
            let parsed = chrono::DateTime::parse_from_rfc3339(&record.expense_date).unwrap();
            let date = parsed.date_naive();
            assert!(date >= start && date <= end, "{} out of window", date);
        }
    }

    #[test]
    fn test_tags_are_sorted_and_small() {
        for record in generate_expenses(50) {
            assert!(record.tags.len() <= 2);
            let mut sorted = record.tags.clone();
            sorted.sort();
            assert_eq!(record.tags, sorted);
        }
    }
}
