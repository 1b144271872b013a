use expense_core::ExpenseStore;

use crate::cli::ListArgs;
use crate::output::print_expense_list;

pub fn handle_list(store: &ExpenseStore, args: &ListArgs) -> anyhow::Result<()> {
    let expenses = store.list()?;
    print_expense_list(&expenses, args.json)
}
