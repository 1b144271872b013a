//! Currency amounts for expense entries.
//!
//! Internally stores amounts in cents (i64) to avoid floating-point
//! precision issues. Amounts stay exact through parsing, storage, and
//! summation; rendering to two decimal places happens only in `Display`.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, Result};

/// Largest storable amount, 9999.99 (six digits, two fractional).
pub const MAX_CENTS: i64 = 999_999;

/// A monetary amount stored as cents (hundredths of the currency unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Create an amount from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Get the amount in cents.
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Parse a user-supplied decimal string.
    ///
    /// Accepts an unsigned decimal with at most two fractional digits
    /// ("4", "4.5", "4.50"), capped at 9999.99. Everything else is a
    /// `Validation` error; the >= 0.01 minimum is left to the table's
    /// check constraint.
    pub fn parse(input: &str) -> Result<Self> {
        let value = input.trim();

        let (whole, fraction) = match value.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (value, ""),
        };

        let well_formed = !(whole.is_empty() && fraction.is_empty())
            && whole.chars().all(|c| c.is_ascii_digit())
            && fraction.chars().all(|c| c.is_ascii_digit())
            && fraction.len() <= 2
            && (value.contains('.') == !fraction.is_empty());

        if !well_formed {
            return Err(ExpenseError::Validation(format!(
                "'{}' is not a valid amount. Use a positive number with up to 2 decimal places.",
                input
            )));
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| {
                ExpenseError::Validation(format!("'{}' is too large an amount.", input))
            })?
        };
        let mut cents_part: i64 = if fraction.is_empty() {
            0
        } else {
            fraction.parse().expect("fraction is 1-2 ascii digits")
        };
        if fraction.len() == 1 {
            cents_part *= 10;
        }

        let cents = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents_part))
            .filter(|&c| c <= MAX_CENTS)
            .ok_or_else(|| {
                ExpenseError::Validation(format!(
                    "'{}' exceeds the maximum amount of {}.",
                    input,
                    Amount::from_cents(MAX_CENTS)
                ))
            })?;

        Ok(Self(cents))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, (self.0 % 100).abs())
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, other: Amount) -> Amount {
        Amount(self.0 + other.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount(0), Add::add)
    }
}
