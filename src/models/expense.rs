//! Expense model
//!
//! A single spending record attributed to one budget and one category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::{BudgetId, ExpenseId};
use super::money::Money;
use crate::store::Record;

/// A single spending record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Display name (e.g., "Milk")
    pub name: String,

    /// Cost of the expense; may be fractional, sign is not constrained
    pub amount: Money,

    /// Expense category; records written before categorization carry none
    /// and resolve to `Other` when read through the repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// The budget this expense belongs to (weak reference by id)
    pub budget_id: BudgetId,

    /// When the expense was created
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        budget_id: BudgetId,
        name: impl Into<String>,
        amount: Money,
        category: Option<Category>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            category: Some(category.unwrap_or_default()),
            budget_id,
            created_at: Utc::now(),
        }
    }

    /// The expense's category, with legacy records resolving to `Other`
    pub fn category(&self) -> Category {
        self.category.unwrap_or_default()
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        Ok(())
    }

    /// Merge a patch into this expense, leaving unset fields untouched
    pub fn apply(&mut self, patch: ExpensePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = Some(category);
        }
        if let Some(budget_id) = patch.budget_id {
            self.budget_id = budget_id;
        }
    }
}

impl Record for Expense {
    const COLLECTION: &'static str = "expenses";
    const ENTITY: &'static str = "Expense";

    // Legacy records resolve their missing category at the read boundary.
    fn normalize(&mut self) {
        self.category = Some(self.category.unwrap_or_default());
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.amount, self.category())
    }
}

/// A partial update to an expense; unset fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub name: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<Category>,
    pub budget_id: Option<BudgetId>,
}

impl ExpensePatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the amount
    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Move the expense to another budget
    pub fn budget_id(mut self, budget_id: BudgetId) -> Self {
        self.budget_id = Some(budget_id);
        self
    }

    /// Check if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.budget_id.is_none()
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
