//! Locale-aware string ordering.
//!
//! Approximates the default collation used by desktop file browsers:
//! accents and case are ignored on the first pass, then lower case sorts
//! before upper case, then raw bytes decide. The result is a total order,
//! so sorting is deterministic on every platform.

use std::cmp::Ordering;

use deunicode::deunicode;

/// Compare two strings using the collation described in the module docs.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

/// Accent- and case-insensitive key.
fn primary_key(s: &str) -> String {
    deunicode(s).to_lowercase()
}

/// Lower case first: `false` for lowercase/uncased chars, `true` for upper.
fn case_key(s: &str) -> Vec<bool> {
    s.chars().map(char::is_uppercase).collect()
}
