//! Startup wiring between the parsed CLI and the ledger store.

use std::path::PathBuf;

use expense_core::ExpenseStore;

use crate::cli::Cli;
use crate::config::default_db_path;

pub fn resolve_db_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(ref path) = cli.db {
        return Ok(PathBuf::from(path));
    }
    default_db_path()
}

/// Resolve the database path and bootstrap the schema.
///
/// Runs before command dispatch; a failure here aborts the process since
/// no operation can succeed without the table.
pub fn open_store(cli: &Cli) -> anyhow::Result<ExpenseStore> {
    let path = resolve_db_path(cli)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("Failed to create data directory {}: {}", parent.display(), e)
            })?;
        }
    }

    let store = ExpenseStore::new(path);
    store.bootstrap()?;
    Ok(store)
}
