//! Expense list formatting

use crate::models::Expense;

/// Format a single expense as one table row
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{:>4}  {}  {:<22} {:<28} {:>10}",
        expense.id.to_string(),
        expense.date.format("%Y-%m-%d"),
        truncate(&expense.category, 22),
        truncate(&expense.desc, 28),
        expense.amount.to_string(),
    )
}

/// Format a list of expenses as a table with a header rule
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:10}  {:<22} {:<28} {:>10}\n",
        "ID", "Date", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut truncated: String = s.chars().take(max.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, ExpenseId};
    use chrono::NaiveDate;

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
    fn test_row_contains_all_fields() {
        let row = format_expense_row(&sample());
        assert!(row.contains("2024-03-05"));
        assert!(row.contains("Housing"));
        assert!(row.contains("march rent"));
        assert!(row.contains("950"));
    }

    #[test]
    fn test_empty_table_message() {
        assert_eq!(format_expense_table(&[]), "No expenses found.\n");
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let table = format_expense_table(&[sample()]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Category"));
        assert!(lines[1].starts_with("---"));
        assert!(lines[2].contains("Housing"));
    }

    #[test]
    fn test_long_description_is_truncated() {
        let mut expense = sample();
        expense.desc = "a very long description that will not fit in the column".into();
        let row = format_expense_row(&expense);
        assert!(row.contains('…'));
    }
}
