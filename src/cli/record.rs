//! Record CLI commands: add, edit, delete, list

use chrono::NaiveDate;

use crate::display::format_expense_table;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{verify_category, Amount, ExpenseId};
use crate::services::{ExpensePatch, ExpenseService};
use crate::storage::ExpenseStore;

/// Handle `spendlog add`
pub fn handle_add(
    store: &ExpenseStore,
    date: Option<String>,
    category: String,
    desc: String,
    amount: String,
) -> ExpenseResult<()> {
    // Date defaults to today when not given
    let date = match date {
        Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                println!(
                    "{}",
                    ExpenseError::InvalidDateFormat {
                        input: raw,
                        expected: "YYYY-MM-DD",
                    }
                );
                return Ok(());
            }
        },
        None => chrono::Local::now().date_naive(),
    };

    let amount = match Amount::parse(&amount) {
        Ok(amount) => amount,
        Err(_) => {
            println!("{}", ExpenseError::InvalidAmountFormat(amount));
            return Ok(());
        }
    };

    let service = ExpenseService::new(store);
    let expense = service.add(date, category, desc, amount)?;
    println!("Expense {} added.", expense.id);
    Ok(())
}

/// Handle `spendlog edit`
pub fn handle_edit(
    store: &ExpenseStore,
    id: u64,
    date: Option<String>,
    category: Option<String>,
    desc: Option<String>,
    amount: Option<String>,
) -> ExpenseResult<()> {
    let category = match category {
        Some(raw) => match verify_category(&raw) {
            Ok(normalized) => Some(normalized),
            Err(err) => {
                println!("{}", err);
                return Ok(());
            }
        },
        None => None,
    };

    let amount = match amount {
        Some(raw) => match Amount::parse(&raw) {
            Ok(amount) => Some(amount),
            Err(_) => {
                println!("{}", ExpenseError::InvalidAmountFormat(raw));
                return Ok(());
            }
        },
        None => None,
    };

    let patch = ExpensePatch {
        date,
        category,
        desc,
        amount,
    };

    let service = ExpenseService::new(store);
    match service.edit(ExpenseId::new(id), patch) {
        Ok(outcome) => {
            if let Some(raw) = outcome.rejected_date {
                println!("Invalid date '{}': expected YYYY-MM-DD. Date left unchanged.", raw);
            }
            println!("Expense {} updated.", outcome.expense.id);
            Ok(())
        }
        Err(err) if err.is_not_found() => {
            println!("{}", err);
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Handle `spendlog delete`
pub fn handle_delete(store: &ExpenseStore, id: u64) -> ExpenseResult<()> {
    let service = ExpenseService::new(store);
    match service.delete(ExpenseId::new(id)) {
        Ok(()) => {
            println!("Expense {} deleted.", id);
            Ok(())
        }
        Err(err) if err.is_not_found() => {
            println!("{}", err);
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Handle `spendlog list`
pub fn handle_list(store: &ExpenseStore) -> ExpenseResult<()> {
    let service = ExpenseService::new(store);
    let expenses = service.list()?;
    if expenses.is_empty() {
        println!("No expenses recorded yet.");
    } else {
        print!("{}", format_expense_table(&expenses));
    }
    Ok(())
}
