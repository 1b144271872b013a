use expense_core::ExpenseStore;

use crate::cli::ClearArgs;
use crate::prompt::confirm_clear;

pub fn handle_clear(store: &ExpenseStore, args: &ClearArgs) -> anyhow::Result<()> {
    if !args.force && !confirm_clear()? {
        return Ok(());
    }

    store.delete_all()?;
    println!("All expenses have been deleted.");
    Ok(())
}
