use expense_core::ExpenseStore;

use crate::cli::DeleteArgs;
use crate::output::print_expense;

pub fn handle_delete(store: &ExpenseStore, args: &DeleteArgs) -> anyhow::Result<()> {
    let Some(ref raw_id) = args.id else {
        println!("You must provide an expense ID.");
        return Ok(());
    };

    let Ok(id) = raw_id.parse::<i64>() else {
        println!("'{}' is not a valid expense ID.", raw_id);
        return Ok(());
    };

    match store.delete(id)? {
        Some(expense) => {
            println!("The following expense has been deleted:");
            print_expense(&expense);
        }
        None => println!("There is no expense with id '{}'.", id),
    }
    Ok(())
}
