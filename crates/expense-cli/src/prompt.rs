//! Confirmation prompt for destructive bulk deletion.

use std::io::{self, BufRead, Write};

/// Ask before removing all expenses.
///
/// Prints the prompt, reads one line from standard input, and returns
/// true only if the trimmed response is "y" (case-insensitive). EOF
/// counts as a decline.
pub fn confirm_clear() -> anyhow::Result<bool> {
    println!("This will remove all expenses. Are you sure? (enter y to confirm)");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
