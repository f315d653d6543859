//! CLI commands for data export
//!
//! CSV exports the transaction log; JSON writes a full backup that
//! `money import` restores.

use std::io::Write;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::MoneyResult;
use crate::export::{csv, json};
use crate::storage::Storage;

use super::create_output;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export all transactions to CSV
    Csv {
        /// Output file path (default: exports/money_manager_export_YYYYMMDD.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Omit the UTF-8 byte-order mark
        #[arg(long)]
        no_bom: bool,
    },
    /// Export the full ledger as a JSON backup
    Json {
        /// Output file path (default: exports/money_manager_backup_YYYYMMDD.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> MoneyResult<()> {
    let today = chrono::Local::now().date_naive();

    match cmd {
        ExportCommands::Csv { output, no_bom } => {
            if storage.read(|ledger| ledger.transactions().is_empty())? {
                println!("No transactions to export.");
                return Ok(());
            }

            let path = output
                .unwrap_or_else(|| storage.paths().export_dir().join(csv::default_file_name(today)));
            let mut writer = create_output(&path)?;
            let bom = settings.csv_byte_order_mark && !no_bom;
            let count = csv::export_transactions_csv(storage, &mut writer, bom)?;
            writer.flush()?;

            println!("Exported {} transactions to: {}", count, path.display());
        }

        ExportCommands::Json { output } => {
            let path = output
                .unwrap_or_else(|| storage.paths().export_dir().join(json::default_file_name(today)));
            let mut writer = create_output(&path)?;
            json::export_full_json(storage, &mut writer)?;
            writer.flush()?;

            println!("Full ledger exported to: {}", path.display());
        }
    }

    Ok(())
}
