//! One handler per subcommand.
//!
//! Handlers validate operands, invoke exactly one store operation, and
//! render the result. Validation and constraint failures are printed to
//! standard output and swallowed (the process still exits 0); storage
//! and connectivity failures propagate to main.

pub mod add;
pub mod clear;
pub mod delete;
pub mod list;
pub mod search;

use expense_core::ExpenseError;

/// Report a user-level failure on stdout, or propagate anything worse.
pub(crate) fn report(err: ExpenseError) -> anyhow::Result<()> {
    if err.is_user_error() {
        println!("{}", err);
        Ok(())
    } else {
        Err(err.into())
    }
}
