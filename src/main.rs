use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{
    handle_add, handle_delete, handle_edit, handle_filter, handle_list, handle_summary,
};
use spendlog::config::Paths;
use spendlog::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Personal expense tracking from the command line",
    long_about = "spendlog records expenses (date, category, description, amount) \
                  in a local JSON file and lets you list, edit, delete, filter, \
                  and summarize them."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add {
        /// Date of the expense (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Category of the expense
        #[arg(short, long)]
        category: String,
        /// Description of the expense
        #[arg(long)]
        desc: String,
        /// Amount spent
        #[arg(short, long)]
        amount: String,
    },

    /// Edit an existing expense
    Edit {
        /// Expense ID to edit
        id: u64,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(long)]
        desc: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
    },

    /// Delete an expense by ID
    Delete {
        /// Expense ID to delete
        id: u64,
    },

    /// List all recorded expenses
    List,

    /// Filter expenses by month range, category, or amount range
    Filter {
        /// Start and end month (YYYY-MM)
        #[arg(short, long, num_args = 2, value_names = ["START", "END"])]
        date: Option<Vec<String>>,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
        /// Lower and upper amount bounds
        #[arg(short, long, num_args = 2, value_names = ["START", "END"])]
        amount: Option<Vec<String>>,
    },

    /// Summarize spending by month or by category
    Summary {
        /// Month (1-12)
        #[arg(short, long)]
        month: Option<u32>,
        /// Year, defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show resolved configuration paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let paths = Paths::new()?;
    let store = ExpenseStore::open(&paths);

    match cli.command {
        Commands::Add {
            date,
            category,
            desc,
            amount,
        } => handle_add(&store, date, category, desc, amount)?,
        Commands::Edit {
            id,
            date,
            category,
            desc,
            amount,
        } => handle_edit(&store, id, date, category, desc, amount)?,
        Commands::Delete { id } => handle_delete(&store, id)?,
        Commands::List => handle_list(&store)?,
        Commands::Filter {
            date,
            category,
            amount,
        } => handle_filter(&store, date, category, amount)?,
        Commands::Summary {
            month,
            year,
            category,
        } => handle_summary(&store, month, year, category)?,
        Commands::Config => {
            println!("spendlog configuration");
            println!("======================");
            println!("Data directory: {}", paths.data_dir().display());
            println!("Expense file:   {}", store.path().display());
        }
    }

    Ok(())
}
