//! Transaction display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::money::DEFAULT_SYMBOL;
use crate::models::Transaction;
use crate::storage::Ledger;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format transactions as a table, resolving account names against `ledger`
pub fn format_transaction_list(transactions: &[Transaction], ledger: &Ledger) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows = transactions.iter().map(|t| TransactionRow {
        date: t.date.to_string(),
        kind: t.transaction_type.to_string(),
        category: t.category.clone(),
        amount: t.signed_amount().format_signed(DEFAULT_SYMBOL),
        account: ledger.account_name(t.account_id).to_string(),
        description: t.description_or_empty().to_string(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(3), Alignment::right());
    table.to_string()
}

/// Format a single transaction's details
pub fn format_transaction_details(transaction: &Transaction, account_name: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Transaction: {}\n", transaction.id));
    output.push_str(&format!("  Date:        {}\n", transaction.date));
    output.push_str(&format!("  Type:        {}\n", transaction.transaction_type));
    output.push_str(&format!("  Category:    {}\n", transaction.category));
    output.push_str(&format!("  Amount:      {}\n", transaction.amount));
    output.push_str(&format!("  Account:     {}\n", account_name));
    if let Some(description) = &transaction.description {
        output.push_str(&format!("  Description: {}\n", description));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, Money, TransactionId, TransactionType};
    use chrono::NaiveDate;

    #[test]
    fn test_transaction_table() {
        let ledger = Ledger::starter();
        let transactions = vec![
            Transaction::new(
                TransactionId::from_raw(5),
                NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
                Money::from_yen(1_500),
                TransactionType::Expense,
                "Food",
                AccountId::from_raw(2),
            )
            .with_description("Groceries"),
            Transaction::new(
                TransactionId::from_raw(6),
                NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
                Money::from_yen(80),
                TransactionType::Income,
                "Other",
                AccountId::from_raw(77),
            ),
        ];

        let table = format_transaction_list(&transactions, &ledger);
        assert!(table.contains("-¥1,500"));
        assert!(table.contains("+¥80"));
        assert!(table.contains("Bank"));
        assert!(table.contains("Unknown"));
        assert!(table.contains("Groceries"));
    }

    #[test]
    fn test_details() {
        let tx = Transaction::new(
            TransactionId::from_raw(5),
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            Money::from_yen(1_500),
            TransactionType::Expense,
            "Food",
            AccountId::from_raw(1),
        );
        let text = format_transaction_details(&tx, "Wallet");
        assert!(text.contains("Account:     Wallet"));
        assert!(!text.contains("Description"));
    }
}
