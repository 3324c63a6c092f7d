//! Category spending summary

use chrono::Datelike;

use crate::error::ExpenseResult;
use crate::models::Amount;
use crate::storage::ExpenseStore;

/// Total spending for one category across one year
#[derive(Debug, Clone)]
pub struct CategorySummary {
    /// The category covered
    pub category: String,
    /// The year covered
    pub year: i32,
    /// Sum of all matching amounts
    pub total: Amount,
    /// Number of matching expenses
    pub expense_count: usize,
}

impl CategorySummary {
    /// Generate the summary for the given category and year.
    ///
    /// Matches on exact category name and the calendar year of each
    /// record's date; the caller validates the name beforehand.
    pub fn generate(store: &ExpenseStore, category: &str, year: i32) -> ExpenseResult<Self> {
        let expenses = store.load()?;
        let mut total = Amount::zero();
        let mut expense_count = 0;
        for expense in expenses
            .iter()
            .filter(|e| e.category == category && e.date.year() == year)
        {
            total += expense.amount;
            expense_count += 1;
        }

        Ok(Self {
            category: category.to_string(),
            year,
            total,
            expense_count,
        })
    }
}
