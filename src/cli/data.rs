//! CLI handlers for restoring a backup, resetting data and reading the audit log

use std::path::Path;

use crate::error::MoneyResult;
use crate::services::ImportService;
use crate::storage::Storage;

/// Handle the import command: replace the ledger with a JSON backup
pub fn handle_import_command(storage: &Storage, file: &Path) -> MoneyResult<()> {
    let summary = ImportService::new(storage).import_file(file)?;

    println!("Ledger restored from: {}", file.display());
    println!("  Accounts:     {}", summary.accounts);
    println!("  Transactions: {}", summary.transactions);
    println!("  Categories:   {}", summary.categories);

    Ok(())
}

/// Handle the reset command: discard everything and start from the starter ledger
pub fn handle_reset_command(storage: &Storage, yes: bool) -> MoneyResult<()> {
    let (accounts, transactions) =
        storage.read(|ledger| (ledger.accounts().len(), ledger.transactions().len()))?;

    if !yes {
        println!(
            "WARNING: This deletes all {} accounts and {} transactions!",
            accounts, transactions
        );
        println!("To proceed, run again with --yes:");
        println!("  money reset --yes");
        return Ok(());
    }

    let discarded = ImportService::new(storage).reset()?;

    println!("All data deleted ({}).", discarded);
    println!("Starter accounts and categories have been restored.");

    Ok(())
}

/// Handle the audit command: print the most recent entries
pub fn handle_audit_command(storage: &Storage, limit: usize) -> MoneyResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
