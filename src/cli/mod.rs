//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod category;
pub mod data;
pub mod export;
pub mod report;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use data::{handle_audit_command, handle_import_command, handle_reset_command};
pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{MoneyError, MoneyResult};
use crate::models::{AccountId, MonthPeriod, TransactionType};
use crate::services::AccountService;
use crate::storage::Storage;

/// Parse `--month`, defaulting to the current month
pub(crate) fn parse_month(month: Option<&str>) -> MoneyResult<MonthPeriod> {
    match month {
        Some(text) => MonthPeriod::parse(text).map_err(|e| MoneyError::Validation(e.to_string())),
        None => Ok(MonthPeriod::current()),
    }
}

/// Parse a `YYYY-MM-DD` date, defaulting to today
pub(crate) fn parse_date(date: Option<&str>) -> MoneyResult<NaiveDate> {
    match date {
        Some(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| {
            MoneyError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", text))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse an `expense` / `income` argument
pub(crate) fn parse_type(text: &str) -> MoneyResult<TransactionType> {
    TransactionType::parse(text).ok_or_else(|| {
        MoneyError::Validation(format!(
            "Invalid transaction type: '{}'. Valid types: expense, income",
            text
        ))
    })
}

/// Resolve an optional `--account` argument to an id
pub(crate) fn resolve_account_filter(
    storage: &Storage,
    account: Option<&str>,
) -> MoneyResult<Option<AccountId>> {
    account
        .map(|identifier| AccountService::new(storage).resolve(identifier).map(|a| a.id))
        .transpose()
}

/// Create a buffered file for report or export output
pub(crate) fn create_output(path: &Path) -> MoneyResult<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path).map_err(|e| {
        MoneyError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
