//! Export module for money-manager
//!
//! - CSV: the transaction log, spreadsheet-compatible
//! - JSON: the full ledger document, restorable with `money import`

pub mod csv;
pub mod json;

pub use self::csv::{export_transactions_csv, write_transactions_csv};
pub use self::json::{export_full_json, write_ledger_json};
