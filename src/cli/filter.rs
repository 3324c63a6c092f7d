//! Filter CLI command

use crate::display::format_expense_table;
use crate::error::ExpenseResult;
use crate::models::verify_category;
use crate::services::QueryService;
use crate::storage::ExpenseStore;

/// Handle `spendlog filter`. One filter mode per invocation; date wins
/// over category over amount when several are given.
pub fn handle_filter(
    store: &ExpenseStore,
    date: Option<Vec<String>>,
    category: Option<String>,
    amount: Option<Vec<String>>,
) -> ExpenseResult<()> {
    let query = QueryService::new(store);

    let result = if let Some(range) = date {
        query.by_month_range(&range[0], &range[1])
    } else if let Some(raw) = category {
        match verify_category(&raw) {
            Ok(normalized) => query.by_category(&normalized),
            Err(err) => {
                println!("{}", err);
                return Ok(());
            }
        }
    } else if let Some(range) = amount {
        query.by_amount_range(&range[0], &range[1])
    } else {
        println!("Provide at least one filter: --date, --category, or --amount.");
        return Ok(());
    };

    match result {
        Ok(expenses) => {
            print!("{}", format_expense_table(&expenses));
            Ok(())
        }
        Err(err) if err.is_recoverable() => {
            println!("{}", err);
            Ok(())
        }
        Err(err) => Err(err),
    }
}
