//! Error types for expense ledger operations.
//!
//! Errors carry user-presentable messages at the core level; the CLI
//! layer decides whether a failure is printed and forgotten (validation,
//! constraint) or aborts the process (connectivity, storage).

use thiserror::Error;

/// Result type alias for expense ledger operations.
pub type Result<T> = std::result::Result<T, ExpenseError>;

/// Core error type for expense ledger operations.
#[derive(Debug, Error)]
pub enum ExpenseError {
    /// Malformed user input (amount, memo, id)
    #[error("{0}")]
    Validation(String),

    /// Row rejected by a database constraint
    #[error("{0}")]
    Constraint(String),

    /// Database unreachable or schema bootstrap failed
    #[error("Unable to open the expense database: {0}")]
    Connectivity(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ExpenseError {
    /// Whether this failure should be reported to the user and swallowed
    /// rather than aborting the process.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ExpenseError::Validation(_) | ExpenseError::Constraint(_)
        )
    }
}

impl From<rusqlite::Error> for ExpenseError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(code, ref message)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                ExpenseError::Constraint(
                    message
                        .clone()
                        .unwrap_or_else(|| "constraint violation".to_string()),
                )
            }
            other => ExpenseError::Storage(other.to_string()),
        }
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        ExpenseError::Storage(err.to_string())
    }
}
