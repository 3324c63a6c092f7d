//! The category registry
//!
//! Expense categories form a fixed, closed set. Free-text input is
//! normalized and checked against the registry before it may reach a
//! stored record.

use crate::error::{ExpenseError, ExpenseResult};

/// The valid expense categories, in display order
pub const CATEGORIES: [&str; 13] = [
    "Sustenance",
    "Housing",
    "Transportation",
    "Bills",
    "Shopping",
    "Entertainment",
    "Health & Fitness",
    "Education",
    "Savings & Investments",
    "Debt Payments",
    "Gifts & Donations",
    "Travel",
    "Other",
];

/// Normalize free-text category input and check registry membership.
///
/// Surrounding whitespace is trimmed and the first character uppercased;
/// the rest of the string is left as typed. Returns the normalized name,
/// or an error carrying the rejected value and the full valid set.
pub fn verify_category(input: &str) -> ExpenseResult<String> {
    let normalized = normalize(input);
    if CATEGORIES.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(ExpenseError::InvalidCategory {
            value: normalized,
            valid: &CATEGORIES,
        })
    }
}

fn normalize(input: &str) -> String {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
