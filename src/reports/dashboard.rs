//! Dashboard report
//!
//! Total balance across all accounts, this month's income and expense
//! breakdowns (optionally for one account) and the most recent transactions.

use crate::error::MoneyResult;
use crate::models::{Account, AccountId, Money, MonthPeriod, Transaction, TransactionType};
use crate::storage::{Ledger, Storage};

use super::period::{aggregate, in_month, PeriodTotals};

/// A recent transaction with its resolved account name
#[derive(Debug, Clone)]
pub struct RecentTransaction {
    pub transaction: Transaction,
    pub account_name: String,
}

/// Dashboard report
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// Month the breakdowns cover
    pub month: MonthPeriod,
    /// All accounts with their current balances
    pub accounts: Vec<Account>,
    /// Sum of all balances (never filtered)
    pub total_balance: Money,
    /// Account the breakdowns are restricted to, if any
    pub account_filter: Option<(AccountId, String)>,
    /// This month's totals
    pub totals: PeriodTotals,
    /// Most recent transactions, newest first
    pub recent: Vec<RecentTransaction>,
}

impl DashboardReport {
    /// Generate the dashboard from storage
    pub fn generate(
        storage: &Storage,
        month: MonthPeriod,
        account_filter: Option<AccountId>,
        recent_limit: usize,
    ) -> MoneyResult<Self> {
        storage.read(|ledger| Self::from_ledger(ledger, month, account_filter, recent_limit))
    }

    /// Build the dashboard over a ledger
    pub fn from_ledger(
        ledger: &Ledger,
        month: MonthPeriod,
        account_filter: Option<AccountId>,
        recent_limit: usize,
    ) -> Self {
        let recent = ledger
            .transactions_newest_first()
            .into_iter()
            .filter(|t| account_filter.map_or(true, |id| t.account_id == id))
            .take(recent_limit)
            .map(|t| RecentTransaction {
                transaction: t.clone(),
                account_name: ledger.account_name(t.account_id).to_string(),
            })
            .collect();

        Self {
            month,
            accounts: ledger.accounts().to_vec(),
            total_balance: ledger.total_balance(),
            account_filter: account_filter
                .map(|id| (id, ledger.account_name(id).to_string())),
            totals: aggregate(ledger.transactions(), None, in_month(month, account_filter)),
            recent,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Dashboard\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("Total Balance: {:>15}\n", self.total_balance));
        for account in &self.accounts {
            output.push_str(&format!("  {:<28} {:>15}\n", account.name, account.balance));
        }

        output.push('\n');
        match &self.account_filter {
            Some((_, name)) => output.push_str(&format!("This month ({}, {})\n", self.month, name)),
            None => output.push_str(&format!("This month ({})\n", self.month)),
        }
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!("Income:  {:>15}\n", self.totals.total_income));
        output.push_str(&format!("Expense: {:>15}\n", self.totals.total_expense));

        for kind in TransactionType::ALL {
            let rows: Vec<_> = self.totals.categories(kind).collect();
            if rows.is_empty() {
                continue;
            }
            output.push_str(&format!("\n{}\n", kind));
            for row in rows {
                output.push_str(&format!("  {:<28} {:>15}\n", row.category, row.total));
            }
        }

        output.push_str("\nRecent Transactions\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        if self.recent.is_empty() {
            output.push_str("No transactions yet.\n");
        }
        for recent in &self.recent {
            let tx = &recent.transaction;
            output.push_str(&format!(
                "{}  {:<14} {:>12}  {}\n",
                tx.date,
                tx.category,
                tx.signed_amount()
                    .format_signed(crate::models::money::DEFAULT_SYMBOL),
                recent.account_name
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::MoneyPaths;
    use crate::services::{NewTransaction, TransactionService};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load().unwrap();
        (temp_dir, storage)
    }

    fn record(storage: &Storage, day: u32, kind: TransactionType, amount: i64, account: u64) {
        TransactionService::new(storage)
            .record(NewTransaction {
                date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
                amount: Money::from_yen(amount),
                transaction_type: kind,
                category: if kind == TransactionType::Income { "Salary" } else { "Food" }.into(),
                account_id: AccountId::from_raw(account),
                description: None,
            })
            .unwrap();
    }

    #[test]
    fn test_income_scenario() {
        let (_temp_dir, storage) = create_test_storage();
        record(&storage, 1, TransactionType::Income, 1000, 1);

        let june = MonthPeriod::new(2024, 6).unwrap();
        let report = DashboardReport::generate(&storage, june, None, 20).unwrap();

        assert_eq!(report.total_balance, Money::from_yen(1000));
        assert_eq!(report.totals.total_income, Money::from_yen(1000));
        assert_eq!(report.totals.total_expense, Money::zero());
        assert_eq!(report.recent.len(), 1);
    }

    #[test]
    fn test_account_filter_limits_breakdowns_not_total() {
        let (_temp_dir, storage) = create_test_storage();
        record(&storage, 1, TransactionType::Income, 1000, 1);
        record(&storage, 2, TransactionType::Expense, 400, 2);
        record(&storage, 3, TransactionType::Expense, 100, 1);

        let june = MonthPeriod::new(2024, 6).unwrap();
        let report =
            DashboardReport::generate(&storage, june, Some(AccountId::from_raw(2)), 20).unwrap();

        assert_eq!(report.total_balance, Money::from_yen(500));
        assert_eq!(report.totals.total_expense, Money::from_yen(400));
        assert_eq!(report.totals.total_income, Money::zero());
        assert_eq!(report.recent.len(), 1);
        assert!(report.format_terminal().contains("This month (2024-06, Bank)"));
    }

    #[test]
    fn test_recent_limit_and_order() {
        let (_temp_dir, storage) = create_test_storage();
        for day in 1..=5 {
            record(&storage, day, TransactionType::Expense, 10, 1);
        }

        let june = MonthPeriod::new(2024, 6).unwrap();
        let report = DashboardReport::generate(&storage, june, None, 3).unwrap();

        let days: Vec<u32> = report
            .recent
            .iter()
            .map(|r| chrono::Datelike::day(&r.transaction.date))
            .collect();
        assert_eq!(days, [5, 4, 3]);
    }
}
