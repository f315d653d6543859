//! Core data models for money-manager
//!
//! Accounts, transactions, the category taxonomy and the value types
//! (money, ids, month periods) they are built from.

pub mod account;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use account::Account;
pub use category::CategoryTaxonomy;
pub use ids::{AccountId, TransactionId};
pub use money::Money;
pub use period::MonthPeriod;
pub use transaction::{Transaction, TransactionType};
