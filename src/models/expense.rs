//! Expense record model
//!
//! One record per expense: id, date, category, description, amount.
//! The struct shape mirrors the persisted JSON objects, so a file entry
//! either parses completely or not at all; internal operations never
//! re-check record shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::ExpenseId;

/// A single expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned on creation
    pub id: ExpenseId,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Category name (a registry member on validated paths)
    pub category: String,

    /// Free-form description
    pub desc: String,

    /// Amount spent
    pub amount: Amount,
}

impl Expense {
    /// Create a new expense record
    pub fn new(
        id: ExpenseId,
        date: NaiveDate,
        category: impl Into<String>,
        desc: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self {
            id,
            date,
            category: category.into(),
            desc: desc.into(),
            amount,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} | {} | {} | {}",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.category,
            self.desc,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expense {
        Expense::new(
            ExpenseId::new(1),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            "Housing",
            "march rent",
            Amount::new(950.0),
        )
    }

    #[test]
    fn test_serialization_round_trip() {
        let expense = sample();
        let json = serde_json::to_string(&expense).unwrap();
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, back);
    }

    #[test]
    fn test_date_serializes_as_iso_string() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["date"], "2024-03-05");
        assert_eq!(json["desc"], "march rent");
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn test_loads_legacy_string_amount() {
        let json = r#"{
            "id": 4,
            "date": "2024-01-15",
            "category": "Bills",
            "desc": "electricity",
            "amount": "72.40"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount, Amount::new(72.4));
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let json = r#"{
            "id": 4,
            "date": "2023-02-29",
            "category": "Bills",
            "desc": "electricity",
            "amount": 72.4
        }"#;
        assert!(serde_json::from_str::<Expense>(json).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "1. 2024-03-05 | Housing | march rent | 950"
        );
    }
}
