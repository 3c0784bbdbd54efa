//! Expense category model
//!
//! Expenses are tagged with one of a fixed set of categories. Stored data
//! may predate categorization or carry labels outside the set, so parsing
//! is lenient: anything unrecognized resolves to `Other`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Food and groceries
    Food,
    /// Travel and transport
    Travel,
    /// Recurring bills
    Bills,
    /// Shopping
    Shopping,
    /// Everything else
    #[default]
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 5] = [
        Self::Food,
        Self::Travel,
        Self::Bills,
        Self::Shopping,
        Self::Other,
    ];

    /// The display label, as stored on disk and shown in exports
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Bills => "Bills",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }

    /// Parse a label, case-insensitively; anything outside the set is `Other`
    pub fn from_label(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "food" => Self::Food,
            "travel" => Self::Travel,
            "bills" => Self::Bills,
            "shopping" => Self::Shopping,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// Lenient serde: one unrecognized label must not fail a whole collection read.

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self::from_label(&s)
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_other() {
        assert_eq!(Category::default(), Category::Other);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Category::from_label("Food"), Category::Food);
        assert_eq!(Category::from_label("travel"), Category::Travel);
        assert_eq!(Category::from_label("  BILLS "), Category::Bills);
        assert_eq!(Category::from_label("shopping"), Category::Shopping);
        assert_eq!(Category::from_label("other"), Category::Other);
    }

    #[test]
    fn test_unknown_label_resolves_to_other() {
        assert_eq!(Category::from_label("groceries"), Category::Other);
        assert_eq!(Category::from_label(""), Category::Other);
    }

    #[test]
    fn test_serialization_uses_label() {
        let json = serde_json::to_string(&Category::Food).unwrap();
        assert_eq!(json, "\"Food\"");

        let parsed: Category = serde_json::from_str("\"Travel\"").unwrap();
        assert_eq!(parsed, Category::Travel);
    }

    #[test]
    fn test_deserialization_is_lenient() {
        let parsed: Category = serde_json::from_str("\"Entertainment\"").unwrap();
        assert_eq!(parsed, Category::Other);
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Shopping.to_string(), "Shopping");
    }
}
