//! Console rendering for expense listings.
//!
//! The text layout is a fixed contract: a count line, one three-column
//! row per expense, and a total line only when more than one row is
//! displayed. Column widths keep the total aligned under the amounts.

use expense_core::{Amount, Expense};

const RULE_WIDTH: usize = 50;

const HELP: &str = "An expense recording system

Commands:

add AMOUNT MEMO - record a new expense
clear - delete all expenses
list - list all expenses
delete NUMBER - remove expense with id NUMBER
search QUERY - list expenses with a matching memo field";

/// Print the usage text shown for unknown or absent commands.
pub fn print_help() {
    println!("{}", HELP);
}

/// Print the count line with zero/singular/plural wording.
pub fn print_count(count: usize) {
    match count {
        0 => println!("There are no expenses."),
        1 => println!("There is one expense."),
        n => println!("There are {} expenses.", n),
    }
}

/// Print one expense in the standard three-column format.
pub fn print_expense(expense: &Expense) {
    println!(
        "{:>3} | {} | {:>12} | {}",
        expense.id,
        expense.created_on,
        expense.amount.to_string(),
        expense.memo
    );
}

fn print_total(expenses: &[Expense]) {
    let total: Amount = expenses.iter().map(|e| e.amount).sum();
    println!("{}", "-".repeat(RULE_WIDTH));
    println!("Total {:>25}", total.to_string());
}

fn expense_json(expense: &Expense) -> serde_json::Value {
    serde_json::json!({
        "id": expense.id,
        "amount": expense.amount.to_string(),
        "memo": expense.memo,
        "created_on": expense.created_on.to_string(),
    })
}

/// Render a query result: count, rows, and a total when more than one
/// row is shown. Used by both list and search so the two commands can
/// never drift apart.
pub fn print_expense_list(expenses: &[Expense], json: bool) -> anyhow::Result<()> {
    if json {
        let values: Vec<serde_json::Value> = expenses.iter().map(expense_json).collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    print_count(expenses.len());
    for expense in expenses {
        print_expense(expense);
    }
    if expenses.len() > 1 {
        print_total(expenses);
    }
    Ok(())
}
