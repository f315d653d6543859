//! Account model
//!
//! An account is a named pot of money (wallet, bank account, ...) whose
//! balance is kept current by the balance engine.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::{Money, MAX_AMOUNT};

/// A financial account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "Wallet")
    pub name: String,

    /// Current balance; mutated only by the balance engine after creation
    pub balance: Money,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(id: AccountId, name: impl Into<String>) -> Self {
        Self::with_balance(id, name, Money::zero())
    }

    /// Create a new account with an initial balance
    pub fn with_balance(id: AccountId, name: impl Into<String>, balance: Money) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
        }
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.chars().count() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.chars().count()));
        }

        if !self.balance.is_within_limit() {
            return Err(AccountValidationError::BalanceTooLarge(self.balance));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.balance)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
    BalanceTooLarge(Money),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
            Self::BalanceTooLarge(balance) => {
                write!(f, "Opening balance {} exceeds the maximum of {}", balance, MAX_AMOUNT)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let account = Account::new(AccountId::from_raw(1), "Wallet");
        assert_eq!(account.name, "Wallet");
        assert!(account.balance.is_zero());
    }

    #[test]
    fn test_validation() {
        let mut account = Account::new(AccountId::from_raw(1), "Bank");
        assert!(account.validate().is_ok());

        account.name = "   ".into();
        assert_eq!(account.validate(), Err(AccountValidationError::EmptyName));

        account.name = "a".repeat(101);
        assert!(matches!(
            account.validate(),
            Err(AccountValidationError::NameTooLong(101))
        ));

        account.name = "Card".into();
        account.balance = Money::from_yen(-9_000_000_000_000);
        assert!(matches!(
            account.validate(),
            Err(AccountValidationError::BalanceTooLarge(_))
        ));
    }

    #[test]
    fn test_serialization_layout() {
        let account = Account::with_balance(AccountId::from_raw(2), "Bank", Money::from_yen(5000));
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json, serde_json::json!({"id": 2, "name": "Bank", "balance": 5000}));
    }

    #[test]
    fn test_display() {
        let account = Account::with_balance(AccountId::from_raw(1), "Wallet", Money::from_yen(1200));
        assert_eq!(account.to_string(), "Wallet (¥1,200)");
    }
}
