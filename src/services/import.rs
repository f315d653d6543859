//! Import service
//!
//! Restores a ledger from a JSON backup. The payload replaces the current
//! ledger wholesale; a rejected payload leaves both the in-memory ledger and
//! the stored file exactly as they were. A reset replaces it with the
//! starter ledger.

use std::path::Path;

use crate::audit::AuditEntry;
use crate::error::{MoneyError, MoneyResult};
use crate::storage::{Ledger, Storage};

/// Collection sizes of a ledger brought in by an import or dropped by a reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub accounts: usize,
    pub transactions: usize,
    pub categories: usize,
}

impl std::fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} accounts, {} transactions, {} categories",
            self.accounts, self.transactions, self.categories
        )
    }
}

/// Service for ledger imports
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Replace the ledger with the contents of a JSON payload
    pub fn import_str(&self, payload: &str) -> MoneyResult<ImportSummary> {
        let incoming = match Ledger::from_import_str(payload) {
            Ok(ledger) => ledger,
            Err(e) => {
                tracing::warn!(error = %e, "import payload rejected");
                return Err(e);
            }
        };

        let summary = ImportSummary {
            accounts: incoming.accounts().len(),
            transactions: incoming.transactions().len(),
            categories: incoming.categories().len(),
        };

        self.storage.mutate(|ledger| {
            *ledger = incoming;
            Ok(())
        })?;

        self.storage
            .log_entry(&AuditEntry::import(summary.to_string()));

        tracing::debug!(%summary, "ledger imported");
        Ok(summary)
    }

    /// Discard all data and start over from the starter ledger
    ///
    /// Returns the sizes of what was discarded.
    pub fn reset(&self) -> MoneyResult<ImportSummary> {
        let discarded = self.storage.mutate(|ledger| {
            let summary = ImportSummary {
                accounts: ledger.accounts().len(),
                transactions: ledger.transactions().len(),
                categories: ledger.categories().len(),
            };
            *ledger = Ledger::starter();
            Ok(summary)
        })?;

        self.storage
            .log_entry(&AuditEntry::reset(discarded.to_string()));

        tracing::debug!(%discarded, "ledger reset");
        Ok(discarded)
    }

    /// Replace the ledger with the contents of a JSON file
    pub fn import_file(&self, path: &Path) -> MoneyResult<ImportSummary> {
        let payload = std::fs::read_to_string(path).map_err(|e| {
            MoneyError::Import(format!("Failed to read {}: {}", path.display(), e))
        })?;
        self.import_str(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::MoneyPaths;
    use crate::models::{AccountId, Money, TransactionType};
    use crate::services::transaction::{NewTransaction, TransactionService};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_import_replaces_ledger() {
        let (_temp_dir, storage) = create_test_storage();
        let payload = r#"{
            "transactions": [
                {"id": 11, "date": "2024-04-02", "amount": 1500, "type": "income",
                 "category": "Salary", "accountId": 3}
            ],
            "accounts": [{"id": 3, "name": "Card", "balance": 1500}],
            "categories": ["Food"]
        }"#;

        let summary = ImportService::new(&storage).import_str(payload).unwrap();

        assert_eq!(summary.accounts, 1);
        assert_eq!(summary.transactions, 1);
        let ledger = storage.snapshot().unwrap();
        assert_eq!(ledger.account_name(AccountId::from_raw(3)), "Card");
        assert_eq!(ledger.categories().names(TransactionType::Expense), ["Food"]);
    }

    #[test]
    fn test_rejected_import_leaves_file_identical() {
        let (_temp_dir, storage) = create_test_storage();
        TransactionService::new(&storage)
            .record(NewTransaction {
                date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                amount: Money::from_yen(1000),
                transaction_type: TransactionType::Income,
                category: "Salary".into(),
                account_id: AccountId::from_raw(1),
                description: None,
            })
            .unwrap();

        let file = storage.paths().ledger_file();
        let bytes_before = std::fs::read(&file).unwrap();
        let ledger_before = storage.snapshot().unwrap();

        let err = ImportService::new(&storage)
            .import_str(r#"{"transactions": []}"#)
            .unwrap_err();

        assert!(matches!(err, MoneyError::Import(_)));
        assert_eq!(std::fs::read(&file).unwrap(), bytes_before);
        assert_eq!(storage.snapshot().unwrap(), ledger_before);
    }

    #[test]
    fn test_reset_restores_starter_ledger() {
        let (_temp_dir, storage) = create_test_storage();
        TransactionService::new(&storage)
            .record(NewTransaction {
                date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                amount: Money::from_yen(1000),
                transaction_type: TransactionType::Income,
                category: "Salary".into(),
                account_id: AccountId::from_raw(1),
                description: None,
            })
            .unwrap();

        let discarded = ImportService::new(&storage).reset().unwrap();

        assert_eq!(discarded.transactions, 1);
        assert_eq!(storage.snapshot().unwrap(), Ledger::starter());

        let reloaded = Storage::new(storage.paths().clone()).unwrap();
        reloaded.load().unwrap();
        assert_eq!(reloaded.snapshot().unwrap(), Ledger::starter());

        let audit = storage.audit().read_all().unwrap();
        assert_eq!(audit.last().unwrap().operation, crate::audit::Operation::Reset);
    }

    #[test]
    fn test_import_missing_file() {
        let (temp_dir, storage) = create_test_storage();
        let err = ImportService::new(&storage)
            .import_file(&temp_dir.path().join("nope.json"))
            .unwrap_err();
        assert!(matches!(err, MoneyError::Import(_)));
    }
}
