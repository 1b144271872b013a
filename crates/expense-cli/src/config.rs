//! Database location resolution.
//!
//! The database path comes from `--db`, then the `EXPENSE_DB`
//! environment variable (both handled by clap), then an XDG data
//! directory default.

use std::path::PathBuf;

pub fn default_db_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("expense.db"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("expense"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("expense"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve the default database path"))?;
    Ok(PathBuf::from(home))
}
