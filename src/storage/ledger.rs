//! The ledger document
//!
//! Accounts, transactions and the category taxonomy held as one aggregate
//! and persisted as one JSON document:
//!
//! ```text
//! {
//!   "transactions": [{ "id", "date", "amount", "type", "category", "accountId", "description" }],
//!   "accounts": [{ "id", "name", "balance" }],
//!   "categories": { "expense": [..], "income": [..] }
//! }
//! ```
//!
//! Read access is public; mutation is crate-private and goes through the
//! services so that balances only ever change via the balance engine.

use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};
use crate::models::{Account, AccountId, CategoryTaxonomy, Money, Transaction, TransactionId};

/// Name shown for a transaction whose account no longer resolves
pub const UNKNOWN_ACCOUNT: &str = "Unknown";

/// The complete set of accounts, transactions and categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    transactions: Vec<Transaction>,

    #[serde(default)]
    accounts: Vec<Account>,

    #[serde(default)]
    categories: CategoryTaxonomy,
}

impl Ledger {
    /// A fresh ledger: two zero-balance accounts and the starter categories
    pub fn starter() -> Self {
        Self {
            transactions: Vec::new(),
            accounts: vec![
                Account::new(AccountId::from_raw(1), "Wallet"),
                Account::new(AccountId::from_raw(2), "Bank"),
            ],
            categories: CategoryTaxonomy::starter(),
        }
    }

    /// A ledger with explicit contents
    pub fn from_parts(
        accounts: Vec<Account>,
        transactions: Vec<Transaction>,
        categories: CategoryTaxonomy,
    ) -> Self {
        Self {
            transactions,
            accounts,
            categories,
        }
    }

    /// Parse an import payload
    ///
    /// The payload must be a JSON object carrying both a `transactions` and an
    /// `accounts` collection; category lists go through the same migration as
    /// a normal load.
    pub fn from_import_str(payload: &str) -> MoneyResult<Self> {
        let value: serde_json::Value = serde_json::from_str(payload)
            .map_err(|e| MoneyError::Import(format!("Payload is not valid JSON: {}", e)))?;

        let object = value
            .as_object()
            .ok_or_else(|| MoneyError::Import("Payload must be a JSON object".into()))?;

        let missing: Vec<&str> = ["transactions", "accounts"]
            .into_iter()
            .filter(|key| !object.get(*key).is_some_and(|v| v.is_array()))
            .collect();
        if !missing.is_empty() {
            return Err(MoneyError::Import(format!(
                "Payload is missing required collection(s): {}",
                missing.join(", ")
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| MoneyError::Import(format!("Payload has an invalid layout: {}", e)))
    }

    /// Serialize the whole document (backup format)
    pub fn to_json_pretty(&self) -> MoneyResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// All accounts, in creation order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// All transactions, in recorded order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The category taxonomy
    pub fn categories(&self) -> &CategoryTaxonomy {
        &self.categories
    }

    /// Look up an account by id
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Look up an account by name (case-insensitive)
    pub fn account_by_name(&self, name: &str) -> Option<&Account> {
        let name_lower = name.trim().to_lowercase();
        self.accounts
            .iter()
            .find(|a| a.name.to_lowercase() == name_lower)
    }

    /// Display name of an account, or "Unknown" for a dangling reference
    pub fn account_name(&self, id: AccountId) -> &str {
        self.account(id)
            .map(|a| a.name.as_str())
            .unwrap_or(UNKNOWN_ACCOUNT)
    }

    /// Sum of all account balances right now
    pub fn total_balance(&self) -> Money {
        self.accounts.iter().map(|a| a.balance).sum()
    }

    /// Transactions in display order (newest date first, then newest id)
    pub fn transactions_newest_first(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = self.transactions.iter().collect();
        sorted.sort_by(|a, b| Transaction::display_order(a, b));
        sorted
    }

    /// Next time-based account id
    pub fn next_account_id(&self) -> AccountId {
        AccountId::next_after(self.accounts.iter().map(|a| a.id).max())
    }

    /// Next time-based transaction id
    pub fn next_transaction_id(&self) -> TransactionId {
        TransactionId::next_after(self.transactions.iter().map(|t| t.id).max())
    }

    pub(crate) fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id == id)
    }

    pub(crate) fn push_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    pub(crate) fn push_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub(crate) fn categories_mut(&mut self) -> &mut CategoryTaxonomy {
        &mut self.categories
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::starter()
    }
}
