//! Budget model
//!
//! A budget is a named spending allotment with a monetary cap. Expenses
//! reference their budget by id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;
use crate::store::Record;

/// A named spending allotment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Display name (e.g., "Groceries")
    pub name: String,

    /// The monetary cap for this budget
    pub amount: Money,

    /// Display accent in "H S% L%" form, assigned at creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// When the budget was created
    pub created_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            id: BudgetId::new(),
            name: name.into(),
            amount,
            color: None,
            created_at: Utc::now(),
        }
    }

    /// Display accent for the nth budget
    ///
    /// Hue steps by 34 degrees per existing budget so neighbors stay
    /// distinguishable.
    pub fn accent_color(existing_count: usize) -> String {
        format!("{} 65% 50%", existing_count * 34)
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.name.trim().is_empty() {
            return Err(BudgetValidationError::EmptyName);
        }

        if self.amount.is_negative() {
            return Err(BudgetValidationError::NegativeAmount);
        }

        Ok(())
    }

    /// Merge a patch into this budget, leaving unset fields untouched
    pub fn apply(&mut self, patch: BudgetPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(color) = patch.color {
            self.color = Some(color);
        }
    }
}

impl Record for Budget {
    const COLLECTION: &'static str = "budgets";
    const ENTITY: &'static str = "Budget";
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.amount)
    }
}

/// A partial update to a budget; unset fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct BudgetPatch {
    pub name: Option<String>,
    pub amount: Option<Money>,
    pub color: Option<String>,
}

impl BudgetPatch {
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

    /// Set the display accent
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Check if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.amount.is_none() && self.color.is_none()
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyName,
    NegativeAmount,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Budget name cannot be empty"),
            Self::NegativeAmount => write!(f, "Budget amount cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
