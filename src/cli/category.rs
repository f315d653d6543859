//! Category CLI commands

use clap::Subcommand;

use crate::display::category::format_category_list;
use crate::error::MoneyResult;
use crate::services::CategoryService;
use crate::storage::Storage;

use super::parse_type;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories
    List {
        /// Only show one type (expense or income)
        #[arg(short = 't', long = "type")]
        transaction_type: Option<String>,
    },
    /// Add a category
    Add {
        /// expense or income
        #[arg(value_name = "TYPE")]
        transaction_type: String,
        /// Category name
        name: String,
    },
    /// Delete a category (existing transactions keep their category)
    Delete {
        /// expense or income
        #[arg(value_name = "TYPE")]
        transaction_type: String,
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> MoneyResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List { transaction_type } => {
            let kind = transaction_type.as_deref().map(parse_type).transpose()?;
            let taxonomy = storage.read(|ledger| ledger.categories().clone())?;
            print!("{}", format_category_list(&taxonomy, kind));
        }

        CategoryCommands::Add {
            transaction_type,
            name,
        } => {
            let kind = parse_type(&transaction_type)?;
            service.add(kind, &name)?;
            println!("Added {} category: {}", kind.as_str(), name.trim());
        }

        CategoryCommands::Delete {
            transaction_type,
            name,
        } => {
            let kind = parse_type(&transaction_type)?;
            service.delete(kind, &name)?;
            println!("Deleted {} category: {}", kind.as_str(), name.trim());
        }
    }

    Ok(())
}
