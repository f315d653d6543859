//! Transaction model
//!
//! A transaction is an immutable record of money leaving (expense) or
//! entering (income) one account on a given date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::ids::{AccountId, TransactionId};
use super::money::{Money, MAX_AMOUNT};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money leaving an account
    Expense,
    /// Money entering an account
    Income,
}

impl TransactionType {
    /// Both types, expense first
    pub const ALL: [TransactionType; 2] = [TransactionType::Expense, TransactionType::Income];

    /// Parse a transaction type from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "expense" | "exp" | "out" => Some(Self::Expense),
            "income" | "inc" | "in" => Some(Self::Income),
            _ => None,
        }
    }

    /// The serialized tag ("expense" / "income")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "Expense"),
            Self::Income => write!(f, "Income"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique, creation-ordered identifier
    pub id: TransactionId,

    /// Transaction date
    pub date: NaiveDate,

    /// Amount, always positive; the type carries the direction
    pub amount: Money,

    /// Expense or income
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    /// Category name; may refer to a category that was since deleted
    pub category: String,

    /// The account this transaction was recorded against
    pub account_id: AccountId,

    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: TransactionId,
        date: NaiveDate,
        amount: Money,
        transaction_type: TransactionType,
        category: impl Into<String>,
        account_id: AccountId,
    ) -> Self {
        Self {
            id,
            date,
            amount,
            transaction_type,
            category: category.into(),
            account_id,
            description: None,
        }
    }

    /// Attach a description; blank text is dropped
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Check if this is income
    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    /// The signed effect on its account's balance (+income, -expense)
    pub fn signed_amount(&self) -> Money {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Description or empty string
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Display ordering: newest date first, then newest id first
    pub fn display_order(a: &Transaction, b: &Transaction) -> Ordering {
        b.date.cmp(&a.date).then(b.id.cmp(&a.id))
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if !self.amount.is_within_limit() {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date,
            self.category,
            self.signed_amount().format_signed(super::money::DEFAULT_SYMBOL),
            self.description_or_empty()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    EmptyCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Transaction amount must be positive, got {}", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Transaction amount {} exceeds the maximum of {}", amount, MAX_AMOUNT)
            }
            Self::EmptyCategory => write!(f, "Transaction category cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: u64, date: (i32, u32, u32), kind: TransactionType) -> Transaction {
        Transaction::new(
            TransactionId::from_raw(id),
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            Money::from_yen(500),
            kind,
            "Food",
            AccountId::from_raw(1),
        )
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(sample(1, (2025, 1, 1), TransactionType::Expense).signed_amount().yen(), -500);
        assert_eq!(sample(1, (2025, 1, 1), TransactionType::Income).signed_amount().yen(), 500);
    }

    #[test]
    fn test_validation() {
        let mut txn = sample(1, (2025, 1, 1), TransactionType::Expense);
        assert!(txn.validate().is_ok());

        txn.amount = Money::zero();
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::NonPositiveAmount(_))
        ));

        txn.amount = Money::from_yen(i64::MAX);
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::AmountTooLarge(_))
        ));

        txn.amount = MAX_AMOUNT;
        assert!(txn.validate().is_ok());

        txn.amount = Money::from_yen(1);
        txn.category = String::new();
        assert_eq!(txn.validate(), Err(TransactionValidationError::EmptyCategory));
    }

    #[test]
    fn test_display_order_date_then_id() {
        let mut txns = vec![
            sample(1, (2025, 1, 5), TransactionType::Expense),
            sample(3, (2025, 1, 4), TransactionType::Expense),
            sample(2, (2025, 1, 5), TransactionType::Income),
        ];
        txns.sort_by(Transaction::display_order);
        let ids: Vec<u64> = txns.iter().map(|t| t.id.as_u64()).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_blank_description_dropped() {
        let txn = sample(1, (2025, 1, 1), TransactionType::Expense).with_description("  ");
        assert!(txn.description.is_none());
        let txn = txn.with_description("lunch");
        assert_eq!(txn.description_or_empty(), "lunch");
    }

    #[test]
    fn test_persisted_layout() {
        let txn = sample(10, (2025, 3, 9), TransactionType::Income).with_description("bonus");
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 10,
                "date": "2025-03-09",
                "amount": 500,
                "type": "income",
                "category": "Food",
                "accountId": 1,
                "description": "bonus"
            })
        );
    }

    #[test]
    fn test_type_parse() {
        assert_eq!(TransactionType::parse("Expense"), Some(TransactionType::Expense));
        assert_eq!(TransactionType::parse("income"), Some(TransactionType::Income));
        assert_eq!(TransactionType::parse("transfer"), None);
    }
}
