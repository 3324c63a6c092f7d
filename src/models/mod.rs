//! Core data models for spendlog
//!
//! This module contains the data structures that represent the expense
//! domain: the expense record, its id and amount newtypes, the category
//! registry, and calendar months.

pub mod amount;
pub mod category;
pub mod expense;
pub mod ids;
pub mod period;

pub use amount::Amount;
pub use category::{verify_category, CATEGORIES};
pub use expense::Expense;
pub use ids::ExpenseId;
pub use period::Month;
