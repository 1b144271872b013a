//! Core data types for the ledger store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// A single persisted expense entry.
///
/// Expenses are write-once: created via add, read via list/search, and
/// destroyed via delete. There is no update operation, so `id`,
/// `amount`, `memo`, and `created_on` never change after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Auto-increment identifier, never reused after deletion
    pub id: i64,

    /// Amount spent, always at least 0.01
    pub amount: Amount,

    /// Free-form description, non-empty
    pub memo: String,

    /// Calendar date the expense was recorded
    pub created_on: NaiveDate,
}
