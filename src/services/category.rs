//! Category service
//!
//! Adds and removes category names per transaction type. Removal only edits
//! the taxonomy; transactions keep whatever category string they were
//! recorded with.

use crate::audit::{AuditEntry, EntityType};
use crate::error::{MoneyError, MoneyResult};
use crate::models::TransactionType;
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Category names for one type, in insertion order
    pub fn list(&self, kind: TransactionType) -> MoneyResult<Vec<String>> {
        self.storage
            .read(|ledger| ledger.categories().names(kind).to_vec())
    }

    /// Add a category name under a type
    pub fn add(&self, kind: TransactionType, name: &str) -> MoneyResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MoneyError::Validation("Category name cannot be empty".into()));
        }

        self.storage.mutate(|ledger| {
            if ledger.categories_mut().add(kind, name) {
                Ok(())
            } else {
                Err(MoneyError::duplicate_category(format!("{} ({})", name, kind.as_str())))
            }
        })?;

        self.storage.log_create(
            EntityType::Category,
            kind.as_str(),
            Some(name.to_string()),
            &name,
        );

        Ok(())
    }

    /// Remove a category name from a type
    pub fn delete(&self, kind: TransactionType, name: &str) -> MoneyResult<()> {
        let name = name.trim();

        self.storage.mutate(|ledger| {
            if ledger.categories_mut().remove(kind, name) {
                Ok(())
            } else {
                Err(MoneyError::category_not_found(format!("{} ({})", name, kind.as_str())))
            }
        })?;

        self.storage.log_entry(&AuditEntry::delete(
            EntityType::Category,
            kind.as_str(),
            Some(name.to_string()),
        ));

        Ok(())
    }
}
