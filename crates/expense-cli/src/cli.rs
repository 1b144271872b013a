use clap::{Args, Parser, Subcommand};

use expense_core::VERSION;

/// Expense - an expense recording system
#[derive(Parser)]
#[command(name = "expense")]
#[command(version = VERSION, about = "An expense recording system", long_about = None)]
pub struct Cli {
    /// Path to the expense database file
    #[arg(short, long, global = true, env = "EXPENSE_DB")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Amount spent (positive, up to 2 decimal places)
    #[arg(value_name = "AMOUNT", allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Description of the expense
    #[arg(value_name = "MEMO")]
    pub memo: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Memo text to search for (case-insensitive substring)
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Id of the expense to remove
    #[arg(value_name = "NUMBER", allow_hyphen_values = true)]
    pub id: Option<String>,
}

/// Arguments for the `clear` command
#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List all expenses
    List(ListArgs),

    /// List expenses with a matching memo field
    Search(SearchArgs),

    /// Remove an expense by id
    Delete(DeleteArgs),

    /// Delete all expenses
    Clear(ClearArgs),

    // Anything unrecognized falls through to the usage text
    #[command(external_subcommand)]
    Other(Vec<String>),
}
