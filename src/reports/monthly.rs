//! Monthly spending summary

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Amount, Month};
use crate::storage::ExpenseStore;

/// Total spending for one calendar month
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    /// The month covered
    pub month: Month,
    /// Sum of all matching amounts
    pub total: Amount,
    /// Number of matching expenses
    pub expense_count: usize,
}

impl MonthlySummary {
    /// Generate the summary for the given month and year.
    ///
    /// The month window runs from the 1st through the last calendar day,
    /// leap-year aware. A month outside 1-12 is rejected.
    pub fn generate(store: &ExpenseStore, month: u32, year: i32) -> ExpenseResult<Self> {
        let month = Month::new(year, month).ok_or(ExpenseError::InvalidMonth(month))?;

        let expenses = store.load()?;
        let mut total = Amount::zero();
        let mut expense_count = 0;
        for expense in expenses.iter().filter(|e| month.contains(e.date)) {
            total += expense.amount;
            expense_count += 1;
        }

        Ok(Self {
            month,
            total,
            expense_count,
        })
    }
}
