//! Entity repository
//!
//! CRUD and query operations over the budget and expense collections,
//! built on an injected `Store`. Every mutation re-reads its collection
//! and writes the modified copy back whole; an advisory mutex keeps
//! in-process callers from interleaving those sequences. Callers re-read
//! state after mutating; the repository pushes no notifications.

use std::sync::{Mutex, MutexGuard};

use log::debug;

use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Budget, BudgetId, BudgetPatch, Category, Expense, ExpenseId, ExpensePatch, Money,
};
use crate::store::{read_records, write_records, FileStore, Record, Store};

/// Repository over the budget and expense collections
pub struct Repository<S: Store> {
    store: S,
    write_lock: Mutex<()>,
}

impl Repository<FileStore> {
    /// Open a repository over the durable file store
    pub fn open(paths: &LedgerPaths) -> LedgerResult<Self> {
        Ok(Self::new(FileStore::open(paths)?))
    }
}

impl<S: Store> Repository<S> {
    /// Create a repository over any store
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Direct access to the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    // ----- queries -----

    /// All budgets, in storage order
    pub fn budgets(&self) -> LedgerResult<Vec<Budget>> {
        read_records(&self.store)
    }

    /// All expenses, in storage order
    pub fn expenses(&self) -> LedgerResult<Vec<Expense>> {
        read_records(&self.store)
    }

    /// All records of one collection satisfying a predicate, in storage order
    ///
    /// No match yields an empty vector, never an error.
    pub fn matching<R, P>(&self, predicate: P) -> LedgerResult<Vec<R>>
    where
        R: Record,
        P: FnMut(&R) -> bool,
    {
        let mut records = read_records::<R, _>(&self.store)?;
        records.retain(predicate);
        Ok(records)
    }

    /// The first record satisfying a predicate, or `None`
    pub fn first_matching<R, P>(&self, predicate: P) -> LedgerResult<Option<R>>
    where
        R: Record,
        P: FnMut(&R) -> bool,
    {
        let records = read_records::<R, _>(&self.store)?;
        Ok(records.into_iter().find(predicate))
    }

    /// Look up a budget by id
    pub fn find_budget(&self, id: BudgetId) -> LedgerResult<Option<Budget>> {
        self.first_matching(|b: &Budget| b.id == id)
    }

    /// Look up an expense by id
    pub fn find_expense(&self, id: ExpenseId) -> LedgerResult<Option<Expense>> {
        self.first_matching(|e: &Expense| e.id == id)
    }

    /// Expenses attributed to one budget, in storage order
    pub fn expenses_for_budget(&self, budget_id: BudgetId) -> LedgerResult<Vec<Expense>> {
        self.matching(|e: &Expense| e.budget_id == budget_id)
    }

    // ----- mutations -----

    /// Create a budget, assigning its id, timestamp, and display accent
    pub fn create_budget(&self, name: impl Into<String>, amount: Money) -> LedgerResult<Budget> {
        let _guard = self.lock()?;

        let mut budgets: Vec<Budget> = read_records(&self.store)?;

        let mut budget = Budget::new(name, amount);
        budget.color = Some(Budget::accent_color(budgets.len()));
        budget
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        debug!("creating budget {} '{}'", budget.id, budget.name);

        budgets.push(budget.clone());
        write_records(&self.store, &budgets)?;

        Ok(budget)
    }

    /// Create an expense attributed to an existing budget
    ///
    /// `None` for the category records it as `Other`.
    pub fn create_expense(
        &self,
        budget_id: BudgetId,
        name: impl Into<String>,
        amount: Money,
        category: Option<Category>,
    ) -> LedgerResult<Expense> {
        let _guard = self.lock()?;

        // Verify the budget exists
        if self.find_budget(budget_id)?.is_none() {
            return Err(LedgerError::Validation(format!(
                "Expense references unknown budget: {}",
                budget_id
            )));
        }

        let mut expenses: Vec<Expense> = read_records(&self.store)?;

        let expense = Expense::new(budget_id, name, amount, category);
        expense
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        debug!("creating expense {} '{}'", expense.id, expense.name);

        expenses.push(expense.clone());
        write_records(&self.store, &expenses)?;

        Ok(expense)
    }

    /// Merge a patch into the budget with the given id
    pub fn update_budget(&self, id: BudgetId, patch: BudgetPatch) -> LedgerResult<Budget> {
        let _guard = self.lock()?;

        let mut budgets: Vec<Budget> = read_records(&self.store)?;
        let budget = budgets
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| LedgerError::budget_not_found(id.to_string()))?;

        budget.apply(patch);
        budget
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;
        let updated = budget.clone();

        write_records(&self.store, &budgets)?;
        Ok(updated)
    }

    /// Merge a patch into the expense with the given id
    ///
    /// Moving the expense to another budget requires that budget to exist.
    pub fn update_expense(&self, id: ExpenseId, patch: ExpensePatch) -> LedgerResult<Expense> {
        let _guard = self.lock()?;

        if let Some(target) = patch.budget_id {
            if self.find_budget(target)?.is_none() {
                return Err(LedgerError::Validation(format!(
                    "Expense references unknown budget: {}",
                    target
                )));
            }
        }

        let mut expenses: Vec<Expense> = read_records(&self.store)?;
        let expense = expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| LedgerError::expense_not_found(id.to_string()))?;

        expense.apply(patch);
        expense
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;
        let updated = expense.clone();

        write_records(&self.store, &expenses)?;
        Ok(updated)
    }

    /// Delete a budget and every expense attributed to it
    ///
    /// Expenses are persisted before budgets, so an interruption between
    /// the two writes cannot leave orphaned expenses behind. A missing id
    /// is a no-op.
    pub fn delete_budget(&self, id: BudgetId) -> LedgerResult<()> {
        let _guard = self.lock()?;

        let mut budgets: Vec<Budget> = read_records(&self.store)?;
        let budgets_before = budgets.len();
        budgets.retain(|b| b.id != id);
        if budgets.len() == budgets_before {
            return Ok(());
        }

        let mut expenses: Vec<Expense> = read_records(&self.store)?;
        let expenses_before = expenses.len();
        expenses.retain(|e| e.budget_id != id);

        debug!(
            "deleting budget {} and {} expense(s)",
            id,
            expenses_before - expenses.len()
        );

        if expenses.len() != expenses_before {
            write_records(&self.store, &expenses)?;
        }
        write_records(&self.store, &budgets)
    }

    /// Delete a single expense; a missing id is a no-op
    pub fn delete_expense(&self, id: ExpenseId) -> LedgerResult<()> {
        let _guard = self.lock()?;

        let mut expenses: Vec<Expense> = read_records(&self.store)?;
        let before = expenses.len();
        expenses.retain(|e| e.id != id);
        if expenses.len() == before {
            return Ok(());
        }

        debug!("deleting expense {}", id);
        write_records(&self.store, &expenses)
    }

    /// Remove both collections from the store
    pub fn clear_all(&self) -> LedgerResult<()> {
        let _guard = self.lock()?;

        self.store.remove(Budget::COLLECTION)?;
        self.store.remove(Expense::COLLECTION)
    }

    fn lock(&self) -> LedgerResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
