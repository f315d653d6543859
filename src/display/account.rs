//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{Account, Money};

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Format a list of accounts with balances as a table, with a total row
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let total: Money = accounts.iter().map(|a| a.balance).sum();

    let rows = accounts
        .iter()
        .map(|a| AccountRow {
            id: a.id.to_string(),
            name: a.name.clone(),
            balance: a.balance.to_string(),
        })
        .chain(std::iter::once(AccountRow {
            id: String::new(),
            name: "TOTAL".into(),
            balance: total.to_string(),
        }));

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(2), Alignment::right());
    table.to_string()
}

/// Format a single account's details
pub fn format_account_details(account: &Account) -> String {
    let mut output = String::new();
    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  ID:       {}\n", account.id));
    output.push_str(&format!("  Balance:  {}\n", account.balance));
    output
}
