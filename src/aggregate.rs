//! Aggregation over expenses
//!
//! Pure functions deriving totals, per-budget spending, and remaining
//! balances from expense slices. Sums accumulate in integer cents, so
//! results are exact regardless of input order.

use crate::models::{Budget, BudgetId, Expense, Money};

/// Sum of all expense amounts; an empty slice sums to zero
pub fn total_spent(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Sum of the amounts of expenses attributed to one budget
pub fn spent_for_budget(budget_id: BudgetId, expenses: &[Expense]) -> Money {
    expenses
        .iter()
        .filter(|e| e.budget_id == budget_id)
        .map(|e| e.amount)
        .sum()
}

/// The budget's cap minus what has been spent against it
///
/// Goes negative when spending exceeds the cap; over-budget is a state,
/// not an error.
pub fn remaining_for_budget(budget: &Budget, expenses: &[Expense]) -> Money {
    budget.amount - spent_for_budget(budget.id, expenses)
}

/// Per-budget roll-up of spending against the cap
#[derive(Debug, Clone)]
pub struct BudgetSummary {
    /// The budget being summarized
    pub budget: Budget,
    /// Total spent against it
    pub spent: Money,
    /// Cap minus spent; negative when over budget
    pub remaining: Money,
}

impl BudgetSummary {
    /// Fraction of the cap consumed, for progress rendering
    ///
    /// Zero-cap budgets report 0.0 rather than dividing by zero.
    pub fn spent_fraction(&self) -> f64 {
        if self.budget.amount.is_zero() {
            return 0.0;
        }
        self.spent.cents() as f64 / self.budget.amount.cents() as f64
    }

    /// Check whether spending has exceeded the cap
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Build the roll-up for one budget
pub fn summarize(budget: &Budget, expenses: &[Expense]) -> BudgetSummary {
    let spent = spent_for_budget(budget.id, expenses);
    BudgetSummary {
        budget: budget.clone(),
        spent,
        remaining: budget.amount - spent,
    }
}

/// Build roll-ups for every budget, in input order
pub fn summarize_all(budgets: &[Budget], expenses: &[Expense]) -> Vec<BudgetSummary> {
    budgets.iter().map(|b| summarize(b, expenses)).collect()
}
