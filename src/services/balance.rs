//! Balance engine
//!
//! Balances are updated forward-only, once per transaction, at the moment the
//! transaction is recorded. The inverse operation exists solely for
//! reconstructing past balances and never touches stored state.

use crate::models::{Money, Transaction, TransactionType};
use crate::storage::Ledger;

/// Result of applying a transaction to the ledger's balances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The referenced account was found and its balance adjusted
    Applied,
    /// No account matches the transaction's account id; nothing was changed
    UnresolvedAccount,
}

impl ApplyOutcome {
    /// Whether a balance was actually changed
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// The balance after the transaction's forward effect
pub fn apply(balance: Money, tx: &Transaction) -> Money {
    match tx.transaction_type {
        TransactionType::Expense => balance - tx.amount,
        TransactionType::Income => balance + tx.amount,
    }
}

/// The balance before the transaction's forward effect
pub fn reverse(balance: Money, tx: &Transaction) -> Money {
    match tx.transaction_type {
        TransactionType::Expense => balance + tx.amount,
        TransactionType::Income => balance - tx.amount,
    }
}

/// Adjust the referenced account's balance for a new transaction
pub fn apply_transaction(ledger: &mut Ledger, tx: &Transaction) -> ApplyOutcome {
    match ledger.account_mut(tx.account_id) {
        Some(account) => {
            account.balance = apply(account.balance, tx);
            ApplyOutcome::Applied
        }
        None => ApplyOutcome::UnresolvedAccount,
    }
}
