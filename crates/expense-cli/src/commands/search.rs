use expense_core::ExpenseStore;

use crate::cli::SearchArgs;
use crate::output::print_expense_list;

pub fn handle_search(store: &ExpenseStore, args: &SearchArgs) -> anyhow::Result<()> {
    let Some(ref query) = args.query else {
        println!("You must provide a memo.");
        return Ok(());
    };

    let expenses = store.search(query)?;
    print_expense_list(&expenses, args.json)
}
