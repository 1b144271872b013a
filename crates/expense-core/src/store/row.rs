//! Raw row decoding for the expenses table.

use chrono::NaiveDate;

use crate::amount::Amount;
use crate::error::ExpenseError;
use crate::store::types::Expense;

/// Column values as read from SQLite, before domain conversion.
pub(crate) struct ExpenseRow {
    pub id: i64,
    pub amount_cents: i64,
    pub memo: String,
    pub created_on: String,
}

impl TryFrom<ExpenseRow> for Expense {
    type Error = ExpenseError;

    fn try_from(row: ExpenseRow) -> Result<Self, Self::Error> {
        let created_on = NaiveDate::parse_from_str(&row.created_on, "%Y-%m-%d")
            .map_err(|e| ExpenseError::Storage(format!("Invalid created_on in row: {}", e)))?;

        Ok(Expense {
            id: row.id,
            amount: Amount::from_cents(row.amount_cents),
            memo: row.memo,
            created_on,
        })
    }
}
