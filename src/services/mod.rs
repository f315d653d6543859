//! Service layer for money-manager
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, balance application and audit logging.

pub mod account;
pub mod balance;
pub mod category;
pub mod import;
pub mod transaction;

pub use account::AccountService;
pub use balance::ApplyOutcome;
pub use category::CategoryService;
pub use import::{ImportService, ImportSummary};
pub use transaction::{NewTransaction, Recorded, TransactionFilter, TransactionService};
