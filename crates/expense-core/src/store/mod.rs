//! SQLite-backed ledger store.
//!
//! The store holds only the database path. Every operation opens its own
//! scoped connection and runs in auto-commit; the connection is released
//! on every exit path when it drops. There is no pooling and no
//! multi-statement transaction spanning operations.

mod row;
mod types;

use std::path::{Path, PathBuf};

use chrono::Local;
use rusqlite::{Connection, OptionalExtension};

use crate::amount::Amount;
use crate::error::{ExpenseError, Result};

use row::ExpenseRow;
pub use types::Expense;

const SELECT_COLUMNS: &str = "SELECT id, amount_cents, memo, created_on FROM expenses";

/// SQLite-backed expense ledger.
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store handle for the database at `path`.
    ///
    /// No connection is made until an operation runs; call
    /// [`bootstrap`](Self::bootstrap) once at startup.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The database path this store operates on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.path)
            .map_err(|e| ExpenseError::Connectivity(format!("{}: {}", self.path.display(), e)))
    }

    /// Ensure the expenses table exists.
    ///
    /// Idempotent; safe to call on every startup. A failure here is
    /// fatal to the caller since no other operation can succeed.
    pub fn bootstrap(&self) -> Result<()> {
        let conn = self.connect()?;

        let exists: Option<String> = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'expenses'",
                [],
                |row| row.get(0),
            )
            .optional()?;

        if exists.is_none() {
            conn.execute_batch(
                r#"
                CREATE TABLE expenses (
                    id           INTEGER PRIMARY KEY AUTOINCREMENT,
                    amount_cents INTEGER NOT NULL CHECK (amount_cents BETWEEN 1 AND 999999),
                    memo         TEXT NOT NULL,
                    created_on   TEXT NOT NULL
                );
                "#,
            )
            .map_err(|e| ExpenseError::Connectivity(format!("schema bootstrap failed: {}", e)))?;
        }

        Ok(())
    }

    /// Insert a new expense dated today, returning its id.
    pub fn add(&self, amount: Amount, memo: &str) -> Result<i64> {
        if memo.trim().is_empty() {
            return Err(ExpenseError::Validation(
                "The memo must not be empty.".to_string(),
            ));
        }

        let conn = self.connect()?;
        let created_on = Local::now().date_naive();

        conn.execute(
            "INSERT INTO expenses (amount_cents, memo, created_on) VALUES (?1, ?2, ?3)",
            (amount.cents(), memo, created_on.to_string()),
        )
        .map_err(|err| match err {
            // The only check constraint on the table is the amount floor;
            // the 9999.99 ceiling is already enforced by Amount::parse.
            rusqlite::Error::SqliteFailure(code, _)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                ExpenseError::Constraint("The amount must be at least 0.01.".to_string())
            }
            other => other.into(),
        })?;

        Ok(conn.last_insert_rowid())
    }

    /// All expenses, oldest first (ties broken by insertion order).
    pub fn list(&self) -> Result<Vec<Expense>> {
        let conn = self.connect()?;
        let query = format!("{} ORDER BY created_on ASC, id ASC", SELECT_COLUMNS);
        let mut stmt = conn.prepare(&query)?;
        let rows = stmt.query_map([], |row| {
            Ok(ExpenseRow {
                id: row.get(0)?,
                amount_cents: row.get(1)?,
                memo: row.get(2)?,
                created_on: row.get(3)?,
            })
        })?;

        let mut expenses = Vec::new();
        for row in rows {
            expenses.push(row?.try_into()?);
        }
        Ok(expenses)
    }

    /// Expenses whose memo contains `query` as a case-insensitive
    /// substring, in the same order as [`list`](Self::list).
    ///
    /// The query is treated literally; `%` and `_` have no special
    /// meaning.
    pub fn search(&self, query: &str) -> Result<Vec<Expense>> {
        let conn = self.connect()?;
        let sql = format!(
            "{} WHERE instr(lower(memo), lower(?1)) > 0 ORDER BY created_on ASC, id ASC",
            SELECT_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([query], |row| {
            Ok(ExpenseRow {
                id: row.get(0)?,
                amount_cents: row.get(1)?,
                memo: row.get(2)?,
                created_on: row.get(3)?,
            })
        })?;

        let mut expenses = Vec::new();
        for row in rows {
            expenses.push(row?.try_into()?);
        }
        Ok(expenses)
    }

    /// Delete the expense with `id`, returning the removed row.
    ///
    /// Returns `Ok(None)` if no such expense exists; not-found is not an
    /// error.
    pub fn delete(&self, id: i64) -> Result<Option<Expense>> {
        let conn = self.connect()?;
        let query = format!("{} WHERE id = ?1", SELECT_COLUMNS);
        let row = conn
            .query_row(&query, [id], |row| {
                Ok(ExpenseRow {
                    id: row.get(0)?,
                    amount_cents: row.get(1)?,
                    memo: row.get(2)?,
                    created_on: row.get(3)?,
                })
            })
            .optional()?;

        let Some(row) = row else {
            return Ok(None);
        };

        conn.execute("DELETE FROM expenses WHERE id = ?1", [id])?;
        Ok(Some(row.try_into()?))
    }

    /// Delete every expense, returning how many were removed.
    pub fn delete_all(&self) -> Result<usize> {
        let conn = self.connect()?;
        let deleted = conn.execute("DELETE FROM expenses", [])?;
        Ok(deleted)
    }
}
