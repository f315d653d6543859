//! Transaction service
//!
//! Records transactions and lists them in display order. Recording builds the
//! record, applies its balance effect, appends it and persists, all inside a
//! single [`Storage::mutate`] so a failed save leaves nothing behind.

use chrono::NaiveDate;

use crate::audit::{AuditEntry, EntityType};
use crate::error::{MoneyError, MoneyResult};
use crate::models::{AccountId, Money, Transaction, TransactionType};
use crate::storage::Storage;

use super::balance::{self, ApplyOutcome};

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub amount: Money,
    pub transaction_type: TransactionType,
    pub category: String,
    pub account_id: AccountId,
    pub description: Option<String>,
}

/// A recorded transaction together with its balance outcome
#[derive(Debug, Clone)]
pub struct Recorded {
    pub transaction: Transaction,
    pub outcome: ApplyOutcome,
}

/// Options for filtering transaction listings
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Only transactions recorded against this account
    pub account_id: Option<AccountId>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by account
    pub fn account(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a transaction and apply it to its account's balance
    ///
    /// A transaction whose account cannot be resolved is still recorded, but
    /// no balance changes; the outcome reports this to the caller.
    pub fn record(&self, input: NewTransaction) -> MoneyResult<Recorded> {
        let recorded = self.storage.mutate(|ledger| {
            let mut transaction = Transaction::new(
                ledger.next_transaction_id(),
                input.date,
                input.amount,
                input.transaction_type,
                input.category.trim(),
                input.account_id,
            );
            if let Some(description) = input.description {
                transaction = transaction.with_description(description);
            }

            transaction
                .validate()
                .map_err(|e| MoneyError::Validation(e.to_string()))?;

            let outcome = balance::apply_transaction(ledger, &transaction);
            ledger.push_transaction(transaction.clone());

            Ok(Recorded {
                transaction,
                outcome,
            })
        })?;

        let mut entry = AuditEntry::create(
            EntityType::Transaction,
            recorded.transaction.id.to_string(),
            Some(recorded.transaction.category.clone()),
            &recorded.transaction,
        );

        if recorded.outcome == ApplyOutcome::UnresolvedAccount {
            tracing::warn!(
                transaction = %recorded.transaction.id,
                account = %recorded.transaction.account_id,
                "transaction references an unknown account; balance not applied"
            );
            entry = entry.with_note(format!(
                "balance not applied: unknown account {}",
                recorded.transaction.account_id
            ));
        }

        self.storage.log_entry(&entry);
        Ok(recorded)
    }

    /// List transactions newest first
    pub fn list(&self, filter: &TransactionFilter) -> MoneyResult<Vec<Transaction>> {
        self.storage.read(|ledger| {
            let matching = ledger
                .transactions_newest_first()
                .into_iter()
                .filter(|t| filter.account_id.map_or(true, |id| t.account_id == id))
                .cloned();

            match filter.limit {
                Some(limit) => matching.take(limit).collect(),
                None => matching.collect(),
            }
        })
    }

    /// Count all recorded transactions
    pub fn count(&self) -> MoneyResult<usize> {
        self.storage.read(|ledger| ledger.transactions().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::MoneyPaths;
    use crate::storage::Ledger;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load().unwrap();
        (temp_dir, storage)
    }

    fn input(kind: TransactionType, amount: i64, day: u32, account: u64) -> NewTransaction {
        NewTransaction {
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            amount: Money::from_yen(amount),
            transaction_type: kind,
            category: "Food".into(),
            account_id: AccountId::from_raw(account),
            description: None,
        }
    }

    #[test]
    fn test_record_applies_balance() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let recorded = service.record(input(TransactionType::Income, 1000, 1, 1)).unwrap();
        assert!(recorded.outcome.is_applied());
        service.record(input(TransactionType::Expense, 300, 2, 1)).unwrap();

        let balance = storage
            .read(|l| l.account(AccountId::from_raw(1)).map(|a| a.balance))
            .unwrap();
        assert_eq!(balance, Some(Money::from_yen(700)));
        assert_eq!(service.count().unwrap(), 2);
    }

    #[test]
    fn test_record_persists() {
        let (temp_dir, storage) = create_test_storage();
        TransactionService::new(&storage)
            .record(input(TransactionType::Expense, 250, 3, 2))
            .unwrap();

        let reloaded = Storage::new(MoneyPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        reloaded.load().unwrap();
        assert_eq!(reloaded.read(|l| l.transactions().len()).unwrap(), 1);
        assert_eq!(reloaded.read(|l| l.total_balance()).unwrap(), Money::from_yen(-250));
    }

    #[test]
    fn test_unresolved_account_still_recorded() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let recorded = service.record(input(TransactionType::Expense, 300, 1, 42)).unwrap();

        assert_eq!(recorded.outcome, ApplyOutcome::UnresolvedAccount);
        assert_eq!(service.count().unwrap(), 1);
        assert_eq!(storage.read(|l| l.total_balance()).unwrap(), Money::zero());

        let audit = storage.audit().read_all().unwrap();
        assert!(audit[0].note.as_deref().unwrap_or("").contains("unknown account"));
    }

    #[test]
    fn test_invalid_amount_rejected_without_mutation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let err = service.record(input(TransactionType::Expense, 0, 1, 1)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.snapshot().unwrap(), Ledger::starter());
    }

    #[test]
    fn test_huge_amount_rejected_without_mutation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let err = service
            .record(input(TransactionType::Income, i64::MAX, 1, 1))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.snapshot().unwrap(), Ledger::starter());
    }

    #[test]
    fn test_audit_failure_does_not_fail_record() {
        let (_temp_dir, storage) = create_test_storage();
        // A directory where the log file should be makes every append fail
        std::fs::create_dir_all(storage.audit().path()).unwrap();

        let recorded = TransactionService::new(&storage)
            .record(input(TransactionType::Income, 1000, 1, 1))
            .unwrap();

        assert!(recorded.outcome.is_applied());
        assert_eq!(storage.read(|l| l.transactions().len()).unwrap(), 1);
        assert!(storage.paths().ledger_file().exists());
    }

    #[test]
    fn test_list_order_and_filter() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let first = service.record(input(TransactionType::Expense, 100, 5, 1)).unwrap();
        let second = service.record(input(TransactionType::Expense, 200, 5, 2)).unwrap();
        let older = service.record(input(TransactionType::Income, 300, 1, 1)).unwrap();

        let all = service.list(&TransactionFilter::new()).unwrap();
        let ids: Vec<_> = all.iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec![second.transaction.id, first.transaction.id, older.transaction.id]
        );

        let wallet_only = service
            .list(&TransactionFilter::new().account(AccountId::from_raw(1)).limit(1))
            .unwrap();
        assert_eq!(wallet_only.len(), 1);
        assert_eq!(wallet_only[0].id, first.transaction.id);
    }
}
