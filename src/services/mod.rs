//! Service layer for spendlog
//!
//! Business logic on top of the storage layer. Every operation loads the
//! full list fresh, works on it in memory, and (for mutations) writes the
//! full list back; the file is the only state between calls.

pub mod expense;
pub mod query;

pub use expense::{EditOutcome, ExpensePatch, ExpenseService};
pub use query::QueryService;
