//! Core data models for pocketledger
//!
//! This module contains the data structures that represent the budgeting
//! domain: budgets, expenses, categories, money, and ids.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use budget::{Budget, BudgetPatch, BudgetValidationError};
pub use category::Category;
pub use expense::{Expense, ExpensePatch, ExpenseValidationError};
pub use ids::{BudgetId, ExpenseId};
pub use money::{Money, MoneyParseError};
