//! Scalar value comparison helpers shared by the predicate evaluator, the
//! search matcher, and the sort comparator.
//!
//! Numbers compare numerically, RFC 3339 timestamp strings compare
//! chronologically, other strings compare by code point after the requested
//! case/accent folding. Cross-type comparisons are indeterminate.

use std::cmp::Ordering;

use chrono::DateTime;
use serde_json::Value;

/// Compares two scalar JSON values, folding strings as requested.
///
/// Returns `None` when the operands are not comparable (mixed types,
/// non-scalar values).
pub(crate) fn compare_values(
    a: &Value,
    b: &Value,
    ignore_case: bool,
    ignore_accent: bool,
) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(a_n), Value::Number(b_n)) => {
            let a_f = a_n.as_f64()?;
            let b_f = b_n.as_f64()?;
            a_f.partial_cmp(&b_f)
        }
        (Value::String(a_s), Value::String(b_s)) => {
            // Timestamps compare by temporal value, not lexically
            if let (Ok(a_t), Ok(b_t)) = (
                DateTime::parse_from_rfc3339(a_s),
                DateTime::parse_from_rfc3339(b_s),
            ) {
                return Some(a_t.cmp(&b_t));
            }
            let a_f = fold(a_s, ignore_case, ignore_accent);
            let b_f = fold(b_s, ignore_case, ignore_accent);
            Some(a_f.cmp(&b_f))
        }
        (Value::Bool(a_b), Value::Bool(b_b)) => Some(a_b.cmp(b_b)),
        _ => None,
    }
}

/// Applies case and accent folding to a string.
pub(crate) fn fold(s: &str, ignore_case: bool, ignore_accent: bool) -> String {
    let mut out: String = if ignore_accent {
        s.chars().map(strip_accent).collect()
    } else {
        s.to_string()
    };
    if ignore_case {
        out = out.to_lowercase();
    }
    out
}

/// Maps common Latin accented characters to their base letter.
fn strip_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' => 'a',
        'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' | 'Ā' => 'A',
        'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ė' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' | 'Ē' | 'Ė' => 'E',
        'í' | 'ì' | 'î' | 'ï' | 'ī' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' | 'Ī' => 'I',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ō' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' | 'Ō' => 'O',
        'ú' | 'ù' | 'û' | 'ü' | 'ū' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' | 'Ū' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        _ => c,
    }
}

/// Renders a scalar value as the string the search/string operators see.
///
/// Objects and arrays have no string form and never match.
pub(crate) fn stringify(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
