//! Expense record operations
//!
//! Create, partial edit, delete, and list. Mutations rewrite the whole
//! store; edit saves even when nothing changed.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Amount, Expense, ExpenseId};
use crate::storage::ExpenseStore;

/// A partial update to an expense record.
///
/// Absent fields are left unchanged; there is no way to clear a field.
/// The date is carried as the raw input string because a bad date rejects
/// only that field, not the rest of the patch.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub date: Option<String>,
    pub category: Option<String>,
    pub desc: Option<String>,
    pub amount: Option<Amount>,
}

impl ExpensePatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new date (raw `YYYY-MM-DD` string)
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set a new category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set a new description
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Set a new amount
    pub fn amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }
}

/// The result of an edit: the record as saved, plus the date string that
/// was rejected field-locally, if any
#[derive(Debug, Clone)]
pub struct EditOutcome {
    pub expense: Expense,
    pub rejected_date: Option<String>,
}

/// Service for expense record management
pub struct ExpenseService<'a> {
    store: &'a ExpenseStore,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a ExpenseStore) -> Self {
        Self { store }
    }

    /// Append a new expense and persist the store.
    ///
    /// The id is one past the current maximum (1 for an empty store).
    /// No category check happens here; validated call paths run
    /// `verify_category` before reaching this point.
    pub fn add(
        &self,
        date: NaiveDate,
        category: impl Into<String>,
        desc: impl Into<String>,
        amount: Amount,
    ) -> ExpenseResult<Expense> {
        let mut expenses = self.store.load()?;
        let expense = Expense::new(next_id(&expenses), date, category, desc, amount);
        expenses.push(expense.clone());
        self.store.save(&expenses)?;
        Ok(expense)
    }

    /// Apply a partial update to the expense with the given id.
    ///
    /// A provided date that does not parse as `YYYY-MM-DD` leaves the
    /// stored date untouched and is reported through the outcome; the
    /// other provided fields still apply. The store is saved whenever the
    /// record was found, changed or not.
    pub fn edit(&self, id: ExpenseId, patch: ExpensePatch) -> ExpenseResult<EditOutcome> {
        let mut expenses = self.store.load()?;
        let expense = expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(ExpenseError::NotFound(id.get()))?;

        let mut rejected_date = None;
        if let Some(raw) = patch.date {
            match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                Ok(date) => expense.date = date,
                Err(_) => rejected_date = Some(raw),
            }
        }
        if let Some(category) = patch.category {
            expense.category = category;
        }
        if let Some(desc) = patch.desc {
            expense.desc = desc;
        }
        if let Some(amount) = patch.amount {
            expense.amount = amount;
        }

        let expense = expense.clone();
        self.store.save(&expenses)?;
        Ok(EditOutcome {
            expense,
            rejected_date,
        })
    }

    /// Remove the expense with the given id and persist the store.
    ///
    /// When nothing matched, nothing is written.
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<()> {
        let mut expenses = self.store.load()?;
        let before = expenses.len();
        expenses.retain(|e| e.id != id);
        if expenses.len() == before {
            return Err(ExpenseError::NotFound(id.get()));
        }
        self.store.save(&expenses)
    }

    /// All expenses in stored (insertion) order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.store.load()
    }
}

fn next_id(expenses: &[Expense]) -> ExpenseId {
    expenses
        .iter()
        .map(|e| e.id)
        .max()
        .map_or(ExpenseId::first(), |id| id.next())
}
