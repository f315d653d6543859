//! JSON backup export
//!
//! The backup is the persisted ledger document itself, so it can be restored
//! with `money import` without any conversion.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{MoneyError, MoneyResult};
use crate::storage::{Ledger, Storage};

/// Default file name for a backup made on `date`
pub fn default_file_name(date: NaiveDate) -> String {
    format!("money_manager_backup_{}.json", date.format("%Y%m%d"))
}

/// Write the full ledger document
pub fn write_ledger_json<W: Write>(ledger: &Ledger, mut writer: W) -> MoneyResult<()> {
    serde_json::to_writer_pretty(&mut writer, ledger)
        .map_err(|e| MoneyError::Export(format!("Failed to serialize ledger: {}", e)))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Export the full ledger from storage
pub fn export_full_json<W: Write>(storage: &Storage, writer: W) -> MoneyResult<()> {
    let ledger = storage.snapshot()?;
    write_ledger_json(&ledger, writer)
}
