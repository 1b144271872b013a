use expense_core::{Amount, ExpenseStore};

use crate::cli::AddArgs;
use crate::commands::report;

pub fn handle_add(store: &ExpenseStore, args: &AddArgs) -> anyhow::Result<()> {
    let (Some(raw_amount), Some(memo)) = (args.amount.as_deref(), args.memo.as_deref()) else {
        println!("You must provide an amount and memo.");
        return Ok(());
    };

    let amount = match Amount::parse(raw_amount) {
        Ok(amount) => amount,
        Err(err) => return report(err),
    };

    if let Err(err) = store.add(amount, memo) {
        return report(err);
    }
    Ok(())
}
