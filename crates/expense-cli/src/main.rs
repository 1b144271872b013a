//! Expense CLI - an expense recording system.
//!
//! This is the command-line interface for Expense. It maps each
//! invocation to exactly one ledger store operation, or prints the
//! usage text.

mod app;
mod cli;
mod commands;
mod config;
mod output;
mod prompt;

use clap::Parser;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Schema bootstrap runs on every startup, before dispatch; if the
    // database is unreachable nothing below can succeed.
    let store = app::open_store(&cli)?;

    match cli.command {
        Some(Commands::Add(ref args)) => commands::add::handle_add(&store, args),
        Some(Commands::List(ref args)) => commands::list::handle_list(&store, args),
        Some(Commands::Search(ref args)) => commands::search::handle_search(&store, args),
        Some(Commands::Delete(ref args)) => commands::delete::handle_delete(&store, args),
        Some(Commands::Clear(ref args)) => commands::clear::handle_clear(&store, args),
        Some(Commands::Other(_)) | None => {
            output::print_help();
            Ok(())
        }
    }
}
