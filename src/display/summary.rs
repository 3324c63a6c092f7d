//! Summary report formatting

use crate::reports::{CategorySummary, MonthlySummary};

/// Format a monthly summary as a single line
pub fn format_monthly_summary(summary: &MonthlySummary) -> String {
    format!(
        "Total spent in {}: {} ({} {})\n",
        summary.month,
        summary.total,
        summary.expense_count,
        plural(summary.expense_count),
    )
}

/// Format a category summary as a single line, total to two decimals
pub fn format_category_summary(summary: &CategorySummary) -> String {
    format!(
        "Total spent on {} in {}: {:.2} ({} {})\n",
        summary.category,
        summary.year,
        summary.total.value(),
        summary.expense_count,
        plural(summary.expense_count),
    )
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "expense"
    } else {
        "expenses"
    }
}
