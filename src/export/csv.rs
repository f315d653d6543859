//! CSV export of the transaction log
//!
//! One row per transaction in recorded order. Every field is quoted so that
//! spreadsheet tools never reinterpret dates or amounts, and the file can be
//! prefixed with a UTF-8 byte-order mark for the same reason.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::MoneyResult;
use crate::storage::{Ledger, Storage};

/// Header row of the transaction export
pub const TRANSACTION_HEADER: [&str; 6] = ["Date", "Type", "Category", "Amount", "Account", "Description"];

/// UTF-8 byte-order mark
pub const BYTE_ORDER_MARK: &[u8] = b"\xEF\xBB\xBF";

/// Default file name for an export made on `date`
pub fn default_file_name(date: NaiveDate) -> String {
    format!("money_manager_export_{}.csv", date.format("%Y%m%d"))
}

/// Write the ledger's transactions as CSV
pub fn write_transactions_csv<W: Write>(
    ledger: &Ledger,
    mut writer: W,
    byte_order_mark: bool,
) -> MoneyResult<usize> {
    if byte_order_mark {
        writer.write_all(BYTE_ORDER_MARK)?;
    }

    let mut csv = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    csv.write_record(TRANSACTION_HEADER)?;

    for tx in ledger.transactions() {
        csv.write_record([
            tx.date.to_string(),
            tx.transaction_type.to_string(),
            tx.category.clone(),
            tx.amount.yen().to_string(),
            ledger.account_name(tx.account_id).to_string(),
            tx.description_or_empty().to_string(),
        ])?;
    }

    csv.flush()?;
    Ok(ledger.transactions().len())
}

/// Export all transactions from storage to CSV
pub fn export_transactions_csv<W: Write>(
    storage: &Storage,
    writer: W,
    byte_order_mark: bool,
) -> MoneyResult<usize> {
    let ledger = storage.snapshot()?;
    write_transactions_csv(&ledger, writer, byte_order_mark)
}
