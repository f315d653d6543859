//! Transaction CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_list};
use crate::error::{MoneyError, MoneyResult};
use crate::models::{Money, TransactionId};
use crate::services::{
    AccountService, ApplyOutcome, NewTransaction, TransactionFilter, TransactionService,
};
use crate::storage::Storage;

use super::{parse_date, parse_type, resolve_account_filter};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// expense or income
        #[arg(value_name = "TYPE")]
        transaction_type: String,
        /// Amount (positive, whole yen)
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Account name or ID
        #[arg(short, long)]
        account: String,
        /// Transaction date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form description
        #[arg(short = 'm', long, alias = "memo")]
        description: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Filter by account
        #[arg(short, long)]
        account: Option<String>,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show one transaction
    Show {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> MoneyResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            transaction_type,
            amount,
            category,
            account,
            date,
            description,
        } => {
            let transaction_type = parse_type(&transaction_type)?;
            let amount = Money::parse(&amount)
                .map_err(|e| MoneyError::Validation(format!("Invalid amount '{}': {}", amount, e)))?;
            let date = parse_date(date.as_deref())?;
            let account = AccountService::new(storage).resolve(&account)?;

            let known = storage
                .read(|ledger| ledger.categories().contains(transaction_type, category.trim()))?;
            if !known {
                println!(
                    "Note: '{}' is not a known {} category.",
                    category.trim(),
                    transaction_type.as_str()
                );
            }

            let recorded = service.record(NewTransaction {
                date,
                amount,
                transaction_type,
                category,
                account_id: account.id,
                description,
            })?;

            let tx = &recorded.transaction;
            println!(
                "Recorded {} of {} ({}) on {} to {}",
                tx.transaction_type.as_str(),
                tx.amount.format_with_symbol(&settings.currency_symbol),
                tx.category,
                tx.date.format(&settings.date_format),
                account.name
            );
            if recorded.outcome == ApplyOutcome::UnresolvedAccount {
                println!("Warning: account not found; balance was not updated.");
            }
        }

        TransactionCommands::List { account, limit } => {
            let mut filter = TransactionFilter::new();
            if let Some(id) = resolve_account_filter(storage, account.as_deref())? {
                filter = filter.account(id);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let transactions = service.list(&filter)?;
            let ledger = storage.snapshot()?;
            println!("{}", format_transaction_list(&transactions, &ledger));
        }

        TransactionCommands::Show { id } => {
            let id: TransactionId = id
                .parse()
                .map_err(|_| MoneyError::Validation(format!("Invalid transaction ID: '{}'", id)))?;

            let found = storage.read(|ledger| {
                ledger
                    .transactions()
                    .iter()
                    .find(|t| t.id == id)
                    .map(|t| (t.clone(), ledger.account_name(t.account_id).to_string()))
            })?;

            let (transaction, account_name) = found.ok_or(MoneyError::NotFound {
                entity_type: "Transaction",
                identifier: id.to_string(),
            })?;
            print!("{}", format_transaction_details(&transaction, &account_name));
        }
    }

    Ok(())
}
