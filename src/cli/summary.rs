//! Summary CLI command

use chrono::Datelike;

use crate::display::{format_category_summary, format_monthly_summary};
use crate::error::ExpenseResult;
use crate::models::verify_category;
use crate::reports::{CategorySummary, MonthlySummary};
use crate::storage::ExpenseStore;

/// Handle `spendlog summary`. Either a month or a category must be
/// given; the year defaults to the current one.
pub fn handle_summary(
    store: &ExpenseStore,
    month: Option<u32>,
    year: Option<i32>,
    category: Option<String>,
) -> ExpenseResult<()> {
    let year = year.unwrap_or_else(|| chrono::Local::now().year());

    if let Some(month) = month {
        match MonthlySummary::generate(store, month, year) {
            Ok(summary) => print!("{}", format_monthly_summary(&summary)),
            Err(err) if err.is_recoverable() => println!("{}", err),
            Err(err) => return Err(err),
        }
    } else if let Some(raw) = category {
        let category = match verify_category(&raw) {
            Ok(normalized) => normalized,
            Err(err) => {
                println!("{}", err);
                return Ok(());
            }
        };
        let summary = CategorySummary::generate(store, &category, year)?;
        print!("{}", format_category_summary(&summary));
    } else {
        println!("Provide either --month or --category.");
    }

    Ok(())
}
