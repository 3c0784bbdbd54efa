//! CSV export
//!
//! Serializes expenses into the downloadable `expenses.csv` artifact.
//! Column layout is fixed: `Description,Amount,Category`, one row per
//! expense in input order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;

/// Name of the exported artifact
pub const EXPENSES_CSV_FILE: &str = "expenses.csv";

/// Write expenses as CSV
///
/// Amounts render in plain decimal form ("120", "7.5"); an expense without
/// a stored category reports "Uncategorized". Rows are newline-separated
/// with no terminator after the last; nothing is written when the input is
/// empty. Fields are written as-is; a name containing a comma will shift
/// its row's columns.
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> LedgerResult<()> {
    if expenses.is_empty() {
        return Ok(());
    }

    write!(writer, "Description,Amount,Category")
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for expense in expenses {
        let category = expense
            .category
            .map(|c| c.label())
            .unwrap_or("Uncategorized");

        write!(
            writer,
            "\n{},{},{}",
            expense.name,
            expense.amount.to_plain_string(),
            category
        )
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Materialize `expenses.csv` inside `dir`
///
/// Returns the path of the written file, or `None` (and writes no file)
/// when there is nothing to export.
pub fn export_expenses_csv(expenses: &[Expense], dir: &Path) -> LedgerResult<Option<PathBuf>> {
    if expenses.is_empty() {
        return Ok(None);
    }

    let path = dir.join(EXPENSES_CSV_FILE);
    let file = File::create(&path).map_err(|e| {
        LedgerError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    write_expenses_csv(expenses, &mut writer)?;
    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    debug!(
        "exported {} expense(s) to {}",
        expenses.len(),
        path.display()
    );

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetId, Category, ExpenseId, Money};
    use chrono::Utc;
    use tempfile::TempDir;

    fn expense(name: &str, cents: i64, category: Option<Category>) -> Expense {
        Expense {
            id: ExpenseId::new(),
            name: name.into(),
            amount: Money::from_cents(cents),
            category,
            budget_id: BudgetId::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_header_and_rows() {
        let expenses = vec![
            expense("Milk", 12000, Some(Category::Food)),
            expense("Bus", 4000, Some(Category::Travel)),
        ];

        let mut out = Vec::new();
        write_expenses_csv(&expenses, &mut out).unwrap();

        let csv = String::from_utf8(out).unwrap();
        assert_eq!(csv, "Description,Amount,Category\nMilk,120,Food\nBus,40,Travel");
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let mut out = Vec::new();
        write_expenses_csv(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_category_reports_uncategorized() {
        let expenses = vec![expense("Milk", 12000, None)];

        let mut out = Vec::new();
        write_expenses_csv(&expenses, &mut out).unwrap();

        let csv = String::from_utf8(out).unwrap();
        assert_eq!(csv, "Description,Amount,Category\nMilk,120,Uncategorized");
    }

    #[test]
    fn test_fractional_amounts_render_plainly() {
        let expenses = vec![
            expense("Coffee", 750, Some(Category::Food)),
            expense("Gum", 325, Some(Category::Other)),
        ];

        let mut out = Vec::new();
        write_expenses_csv(&expenses, &mut out).unwrap();

        let csv = String::from_utf8(out).unwrap();
        assert_eq!(csv, "Description,Amount,Category\nCoffee,7.5,Food\nGum,3.25,Other");
    }

    #[test]
    fn test_export_empty_creates_no_file() {
        let temp_dir = TempDir::new().unwrap();

        let path = export_expenses_csv(&[], temp_dir.path()).unwrap();

        assert!(path.is_none());
        assert!(!temp_dir.path().join(EXPENSES_CSV_FILE).exists());
    }

    #[test]
    fn test_export_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let expenses = vec![expense("Milk", 12000, Some(Category::Food))];

        let path = export_expenses_csv(&expenses, temp_dir.path())
            .unwrap()
            .unwrap();

        assert_eq!(path, temp_dir.path().join(EXPENSES_CSV_FILE));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Description,Amount,Category\nMilk,120,Food");
    }
}
