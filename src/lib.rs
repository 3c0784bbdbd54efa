//! pocketledger - local-first data layer for a personal budgeting app
//!
//! This library provides the persistence, lookup, and aggregation logic
//! behind a personal budgeting tool: budgets with monetary caps, expenses
//! attributed to them, spending totals, and CSV export. It is the data
//! layer only; any UI renders what these modules return and calls back in,
//! re-reading state after each mutation.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (budgets, expenses, categories, money)
//! - `store`: Named JSON collection storage (file-backed and in-memory)
//! - `repository`: CRUD and queries over the collections
//! - `aggregate`: Spending totals and per-budget summaries
//! - `export`: CSV export
//! - `format`: Display formatting helpers
//!
//! # Example
//!
//! ```rust
//! use pocketledger::models::{Category, Money};
//! use pocketledger::store::MemoryStore;
//! use pocketledger::{aggregate, Repository};
//!
//! # fn main() -> pocketledger::LedgerResult<()> {
//! let repo = Repository::new(MemoryStore::new());
//!
//! let budget = repo.create_budget("Groceries", Money::from_major(5000))?;
//! repo.create_expense(budget.id, "Milk", Money::from_major(120), Some(Category::Food))?;
//!
//! let expenses = repo.expenses()?;
//! assert_eq!(aggregate::total_spent(&expenses), Money::from_major(120));
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod models;
pub mod repository;
pub mod store;

pub use error::{LedgerError, LedgerResult};
pub use repository::Repository;
