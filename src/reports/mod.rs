//! Summary reports for spendlog
//!
//! Aggregates total spending over a calendar month or over a
//! category-and-year slice of the expense list.

pub mod category;
pub mod monthly;

pub use category::CategorySummary;
pub use monthly::MonthlySummary;
