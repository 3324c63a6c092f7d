//! Display formatting for terminal output
//!
//! Pure formatting functions returning strings; the CLI layer decides
//! when to print them.

pub mod expense;
pub mod summary;

pub use expense::{format_expense_row, format_expense_table};
pub use summary::{format_category_summary, format_monthly_summary};
