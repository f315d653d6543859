//! Account service
//!
//! Creates accounts and resolves user-supplied account references. Balances
//! are never edited here; after creation they move only through the balance
//! engine.

use crate::audit::EntityType;
use crate::error::{MoneyError, MoneyResult};
use crate::models::{Account, AccountId, Money};
use crate::storage::Storage;

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a Storage,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new account with an initial balance
    pub fn create(&self, name: &str, initial_balance: Money) -> MoneyResult<Account> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MoneyError::Validation("Account name cannot be empty".into()));
        }

        let account = self.storage.mutate(|ledger| {
            if ledger.account_by_name(name).is_some() {
                return Err(MoneyError::Duplicate {
                    entity_type: "Account",
                    identifier: name.to_string(),
                });
            }

            let account = Account::with_balance(ledger.next_account_id(), name, initial_balance);
            account
                .validate()
                .map_err(|e| MoneyError::Validation(e.to_string()))?;

            ledger.push_account(account.clone());
            Ok(account)
        })?;

        self.storage.log_create(
            EntityType::Account,
            account.id.to_string(),
            Some(account.name.clone()),
            &account,
        );

        tracing::debug!(id = %account.id, name = %account.name, "account created");
        Ok(account)
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> MoneyResult<Option<Account>> {
        self.storage.read(|ledger| ledger.account(id).cloned())
    }

    /// Find an account by name or ID string
    pub fn find(&self, identifier: &str) -> MoneyResult<Option<Account>> {
        self.storage.read(|ledger| {
            if let Some(account) = ledger.account_by_name(identifier) {
                return Some(account.clone());
            }

            identifier
                .parse::<AccountId>()
                .ok()
                .and_then(|id| ledger.account(id).cloned())
        })
    }

    /// Find an account or fail with a not-found error
    pub fn resolve(&self, identifier: &str) -> MoneyResult<Account> {
        self.find(identifier)?
            .ok_or_else(|| MoneyError::account_not_found(identifier))
    }

    /// Get all accounts in creation order
    pub fn list(&self) -> MoneyResult<Vec<Account>> {
        self.storage.read(|ledger| ledger.accounts().to_vec())
    }

    /// Sum of all current balances
    pub fn total_balance(&self) -> MoneyResult<Money> {
        self.storage.read(|ledger| ledger.total_balance())
    }
}
