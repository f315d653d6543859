use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use money_manager::cli::{
    handle_account_command, handle_audit_command, handle_category_command,
    handle_export_command, handle_import_command, handle_report_command,
    handle_reset_command, handle_transaction_command,
};
use money_manager::config::{paths::MoneyPaths, settings::Settings};
use money_manager::logging::init_tracing;
use money_manager::storage::{LoadStatus, Storage};

#[derive(Parser)]
#[command(
    name = "money",
    version,
    about = "Terminal personal finance tracker",
    long_about = "money-manager records expenses and income against your accounts \
                  and shows where the money went: a dashboard, monthly analytics, \
                  a calendar of daily totals and the trend of your total assets."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(money_manager::cli::AccountCommands),

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(money_manager::cli::TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(money_manager::cli::CategoryCommands),

    /// Reports: dashboard, month, trend, calendar
    #[command(subcommand)]
    Report(money_manager::cli::ReportCommands),

    /// Export transactions (CSV) or the full ledger (JSON)
    #[command(subcommand)]
    Export(money_manager::cli::ExportCommands),

    /// Replace the ledger with a JSON backup
    Import {
        /// Path to the backup file
        file: PathBuf,
    },

    /// Delete all data and start over from the starter ledger
    Reset {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize settings and a starter ledger
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = MoneyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    if storage.load()? == LoadStatus::Recovered {
        eprintln!("Warning: stored data could not be read; starting from an empty ledger.");
    }

    match cli.command {
        Some(Commands::Account(cmd)) => handle_account_command(&storage, &settings, cmd)?,
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&storage, &settings, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&storage, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, &settings, cmd)?,
        Some(Commands::Import { file }) => handle_import_command(&storage, &file)?,
        Some(Commands::Reset { yes }) => handle_reset_command(&storage, yes)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&storage, limit)?,
        Some(Commands::Init) => {
            println!("Initializing money-manager at: {}", paths.base_dir().display());
            money_manager::storage::initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Starter accounts: Wallet, Bank");
            println!("Run 'money category list' to see the starter categories.");
        }
        Some(Commands::Config) => {
            println!("money-manager Configuration");
            println!("===========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Ledger file:      {}", paths.ledger_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Trend points:        {}", settings.history_points);
            println!("  Date format:         {}", settings.date_format);
            println!(
                "  Week starts on:      {}",
                if settings.week_starts_monday() { "Monday" } else { "Sunday" }
            );
            println!("  CSV byte-order mark: {}", settings.csv_byte_order_mark);
            println!("  Recent transactions: {}", settings.recent_transactions);
        }
        None => {
            println!("money-manager - Terminal personal finance tracker");
            println!();
            println!("Run 'money --help' for usage information.");
            println!("Run 'money report dashboard' for an overview.");
        }
    }

    Ok(())
}
