//! Category taxonomy
//!
//! Category names are kept per transaction type as ordered, duplicate-free
//! lists. Transactions refer to categories by name only, so removing a name
//! from the taxonomy never touches recorded transactions.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::transaction::TransactionType;

/// Expense categories of a fresh ledger
pub const STARTER_EXPENSE_CATEGORIES: [&str; 5] =
    ["Food", "Transport", "Daily Goods", "Entertainment", "Other"];

/// Income categories of a fresh ledger (also used when migrating flat lists)
pub const STARTER_INCOME_CATEGORIES: [&str; 3] = ["Salary", "Bonus", "Other"];

/// Single category assigned to a type whose list is missing from stored data
pub const FALLBACK_CATEGORY: &str = "Other";

/// Ordered category names keyed by transaction type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTaxonomy {
    names: BTreeMap<TransactionType, Vec<String>>,
}

impl CategoryTaxonomy {
    /// A taxonomy with no categories at all
    pub fn empty() -> Self {
        let names = TransactionType::ALL
            .iter()
            .map(|kind| (*kind, Vec::new()))
            .collect();
        Self { names }
    }

    /// The starter taxonomy of a fresh ledger
    pub fn starter() -> Self {
        Self::from_lists(
            STARTER_EXPENSE_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            STARTER_INCOME_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        )
    }

    /// Build from explicit lists; repeated names are dropped, first wins
    pub fn from_lists(expense: Vec<String>, income: Vec<String>) -> Self {
        let mut taxonomy = Self::empty();
        for (kind, list) in [(TransactionType::Expense, expense), (TransactionType::Income, income)] {
            for name in list {
                // Duplicates in stored data are collapsed silently
                let _ = taxonomy.add(kind, name);
            }
        }
        taxonomy
    }

    /// Category names for a type, in insertion order
    pub fn names(&self, kind: TransactionType) -> &[String] {
        self.names.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check whether a name exists for a type (exact match)
    pub fn contains(&self, kind: TransactionType, name: &str) -> bool {
        self.names(kind).iter().any(|n| n == name)
    }

    /// Append a name; returns false (and changes nothing) if it already exists
    pub fn add(&mut self, kind: TransactionType, name: impl Into<String>) -> bool {
        let name = name.into();
        let list = self.names.entry(kind).or_default();
        if list.iter().any(|n| *n == name) {
            return false;
        }
        list.push(name);
        true
    }

    /// Remove a name; returns false if it was not present
    pub fn remove(&mut self, kind: TransactionType, name: &str) -> bool {
        let Some(list) = self.names.get_mut(&kind) else {
            return false;
        };
        let before = list.len();
        list.retain(|n| n != name);
        list.len() != before
    }

    /// Total number of names across both types
    pub fn len(&self) -> usize {
        self.names.values().map(Vec::len).sum()
    }

    /// True when neither type has any category
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CategoryTaxonomy {
    fn default() -> Self {
        Self::starter()
    }
}

impl Serialize for CategoryTaxonomy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TransactionType::ALL.len()))?;
        for kind in TransactionType::ALL {
            map.serialize_entry(kind.as_str(), self.names(kind))?;
        }
        map.end()
    }
}

/// Shapes the taxonomy has been stored in over time
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredTaxonomy {
    /// Older documents: one flat list, all expense categories
    Flat(Vec<String>),
    /// Current documents: one list per type, either may be missing
    ByType {
        #[serde(default)]
        expense: Option<Vec<String>>,
        #[serde(default)]
        income: Option<Vec<String>>,
    },
}

impl From<StoredTaxonomy> for CategoryTaxonomy {
    fn from(stored: StoredTaxonomy) -> Self {
        let fallback = || vec![FALLBACK_CATEGORY.to_string()];
        match stored {
            StoredTaxonomy::Flat(expense) => Self::from_lists(
                expense,
                STARTER_INCOME_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            ),
            StoredTaxonomy::ByType { expense, income } => Self::from_lists(
                expense.unwrap_or_else(fallback),
                income.unwrap_or_else(fallback),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for CategoryTaxonomy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        StoredTaxonomy::deserialize(deserializer).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_taxonomy() {
        let taxonomy = CategoryTaxonomy::starter();
        assert_eq!(taxonomy.names(TransactionType::Expense).len(), 5);
        assert_eq!(taxonomy.names(TransactionType::Income), ["Salary", "Bonus", "Other"]);
    }

    #[test]
    fn test_add_rejects_duplicates_per_type() {
        let mut taxonomy = CategoryTaxonomy::empty();
        assert!(taxonomy.add(TransactionType::Expense, "Rent"));
        assert!(!taxonomy.add(TransactionType::Expense, "Rent"));
        // Same name under the other type is a different category
        assert!(taxonomy.add(TransactionType::Income, "Rent"));
        assert_eq!(taxonomy.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut taxonomy = CategoryTaxonomy::starter();
        assert!(taxonomy.remove(TransactionType::Expense, "Food"));
        assert!(!taxonomy.remove(TransactionType::Expense, "Food"));
        assert!(!taxonomy.contains(TransactionType::Expense, "Food"));
        assert!(taxonomy.contains(TransactionType::Income, "Other"));
    }

    #[test]
    fn test_serialize_shape() {
        let taxonomy = CategoryTaxonomy::from_lists(vec!["Food".into()], vec!["Salary".into()]);
        let json = serde_json::to_value(&taxonomy).unwrap();
        assert_eq!(json, serde_json::json!({"expense": ["Food"], "income": ["Salary"]}));
    }

    #[test]
    fn test_migrates_flat_list() {
        let taxonomy: CategoryTaxonomy = serde_json::from_str(r#"["Food", "Rent"]"#).unwrap();
        assert_eq!(taxonomy.names(TransactionType::Expense), ["Food", "Rent"]);
        assert_eq!(taxonomy.names(TransactionType::Income), STARTER_INCOME_CATEGORIES);
    }

    #[test]
    fn test_missing_key_gets_fallback() {
        let taxonomy: CategoryTaxonomy = serde_json::from_str(r#"{"expense": ["Food"]}"#).unwrap();
        assert_eq!(taxonomy.names(TransactionType::Expense), ["Food"]);
        assert_eq!(taxonomy.names(TransactionType::Income), [FALLBACK_CATEGORY]);

        let taxonomy: CategoryTaxonomy = serde_json::from_str("{}").unwrap();
        assert_eq!(taxonomy.names(TransactionType::Expense), [FALLBACK_CATEGORY]);
    }
}
