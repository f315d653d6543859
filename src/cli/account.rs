//! Account CLI commands
//!
//! Implements CLI commands for account management.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::account::{format_account_details, format_account_list};
use crate::error::{MoneyError, MoneyResult};
use crate::models::Money;
use crate::services::AccountService;
use crate::storage::Storage;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    #[command(alias = "create")]
    Add {
        /// Account name
        name: String,
        /// Initial balance (e.g., "10000" or "¥10,000")
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        balance: String,
    },
    /// List all accounts with balances
    List,
    /// Show account details
    Show {
        /// Account name or ID
        account: String,
    },
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AccountCommands,
) -> MoneyResult<()> {
    let service = AccountService::new(storage);

    match cmd {
        AccountCommands::Add { name, balance } => {
            let initial_balance = Money::parse(&balance).map_err(|e| {
                MoneyError::Validation(format!("Invalid balance '{}': {}", balance, e))
            })?;

            let account = service.create(&name, initial_balance)?;

            println!("Created account: {}", account.name);
            println!(
                "  Initial Balance: {}",
                account.balance.format_with_symbol(&settings.currency_symbol)
            );
            println!("  ID: {}", account.id);
        }

        AccountCommands::List => {
            let accounts = service.list()?;
            println!("{}", format_account_list(&accounts));
        }

        AccountCommands::Show { account } => {
            let found = service.resolve(&account)?;
            print!("{}", format_account_details(&found));
        }
    }

    Ok(())
}
