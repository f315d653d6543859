//! Display formatting for terminal output
//!
//! Tables and detail views for accounts, transactions and categories.

pub mod account;
pub mod category;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use category::format_category_list;
pub use transaction::{format_transaction_details, format_transaction_list};
