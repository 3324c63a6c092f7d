//! Read-only queries over the expense list
//!
//! Filters by category, month range, and amount range. Range inputs
//! arrive as raw strings and are validated here, at the start of the
//! operation.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Amount, Expense, Month};
use crate::storage::ExpenseStore;

/// Service for filtering expenses
pub struct QueryService<'a> {
    store: &'a ExpenseStore,
}

impl<'a> QueryService<'a> {
    /// Create a new query service
    pub fn new(store: &'a ExpenseStore) -> Self {
        Self { store }
    }

    /// Expenses whose category equals the given name exactly.
    ///
    /// Callers validate the name beforehand; an unknown name simply
    /// matches nothing.
    pub fn by_category(&self, category: &str) -> ExpenseResult<Vec<Expense>> {
        let expenses = self.store.load()?;
        Ok(expenses
            .into_iter()
            .filter(|e| e.category == category)
            .collect())
    }

    /// Expenses dated within `[start, end]`, both given as `YYYY-MM`.
    ///
    /// The range spans the first day of the start month through the last
    /// day of the end month, inclusive.
    pub fn by_month_range(&self, start: &str, end: &str) -> ExpenseResult<Vec<Expense>> {
        let first = parse_month(start)?.first_day();
        let last = parse_month(end)?.last_day();

        let expenses = self.store.load()?;
        Ok(expenses
            .into_iter()
            .filter(|e| e.date >= first && e.date <= last)
            .collect())
    }

    /// Expenses whose amount falls within the given bounds, compared in
    /// whole units.
    pub fn by_amount_range(&self, start: &str, end: &str) -> ExpenseResult<Vec<Expense>> {
        let start = parse_bound(start)?;
        let end = parse_bound(end)?;

        let expenses = self.store.load()?;
        Ok(expenses
            .into_iter()
            .filter(|e| amount_in_whole_range(e.amount, start, end))
            .collect())
    }
}

fn parse_month(input: &str) -> ExpenseResult<Month> {
    input.parse().map_err(|_| ExpenseError::InvalidDateFormat {
        input: input.to_string(),
        expected: "YYYY-MM",
    })
}

fn parse_bound(input: &str) -> ExpenseResult<f64> {
    Amount::parse(input)
        .map(|a| a.value())
        .map_err(|_| ExpenseError::InvalidAmountFormat(input.to_string()))
}

// Whole-unit range check: the stored amount is truncated and the bounds
// floored before comparing, so 19.99 falls inside [10, 19]. All amount
// range filtering goes through here.
fn amount_in_whole_range(amount: Amount, start: f64, end: f64) -> bool {
    let whole = amount.truncated();
    whole >= start.floor() as i64 && whole <= end.floor() as i64
}
