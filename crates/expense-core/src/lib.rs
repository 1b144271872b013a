//! # Expense Core
//!
//! Core library for Expense - a CLI personal expense ledger.
//!
//! This crate provides the domain model, error taxonomy, and the
//! SQLite-backed ledger store independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **amount**: exact decimal currency amounts (integer cents)
//! - **store**: schema bootstrap and the five ledger operations
//!   (add, list, search, delete-one, delete-all)
//! - **error**: error taxonomy shared across the workspace

pub mod amount;
pub mod error;
pub mod store;

pub use amount::Amount;
pub use error::{ExpenseError, Result};
pub use store::{Expense, ExpenseStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
