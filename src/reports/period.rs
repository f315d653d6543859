//! Period aggregation and the monthly analytics report
//!
//! [`aggregate`] sums a selection of transactions per category and per
//! direction. Any window works: callers pass a predicate, usually
//! [`in_month`]. Totals are computed fresh on every call.

use std::io::Write;

use crate::error::MoneyResult;
use crate::models::{AccountId, Money, MonthPeriod, Transaction, TransactionType};
use crate::storage::Storage;

/// Total for one category of one transaction type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Expense or income
    pub transaction_type: TransactionType,
    /// Category name as recorded on the transactions
    pub category: String,
    /// Sum of amounts
    pub total: Money,
    /// Number of transactions summed
    pub transaction_count: usize,
}

/// Aggregated totals for a window
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodTotals {
    /// Per-category totals in order of first occurrence
    pub by_category: Vec<CategoryTotal>,
    /// Sum of all income in the window
    pub total_income: Money,
    /// Sum of all expense in the window
    pub total_expense: Money,
}

impl PeriodTotals {
    /// Income minus expense
    pub fn net(&self) -> Money {
        self.total_income - self.total_expense
    }

    /// Category totals of one type, in order of first occurrence
    pub fn categories(&self, kind: TransactionType) -> impl Iterator<Item = &CategoryTotal> {
        self.by_category
            .iter()
            .filter(move |c| c.transaction_type == kind)
    }

    /// Total for a single category; zero if nothing was recorded under it
    pub fn category_total(&self, kind: TransactionType, category: &str) -> Money {
        self.categories(kind)
            .find(|c| c.category == category)
            .map(|c| c.total)
            .unwrap_or_default()
    }

    /// Total for one type
    pub fn total(&self, kind: TransactionType) -> Money {
        match kind {
            TransactionType::Expense => self.total_expense,
            TransactionType::Income => self.total_income,
        }
    }

    /// True when no transaction matched
    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }
}

/// Sum the transactions selected by `predicate` (and `type_filter`, if set)
pub fn aggregate<'t, I, P>(
    transactions: I,
    type_filter: Option<TransactionType>,
    predicate: P,
) -> PeriodTotals
where
    I: IntoIterator<Item = &'t Transaction>,
    P: Fn(&Transaction) -> bool,
{
    let mut totals = PeriodTotals::default();

    let selected = transactions
        .into_iter()
        .filter(|t| type_filter.map_or(true, |kind| t.transaction_type == kind))
        .filter(|t| predicate(t));

    for tx in selected {
        match tx.transaction_type {
            TransactionType::Income => totals.total_income += tx.amount,
            TransactionType::Expense => totals.total_expense += tx.amount,
        }

        match totals
            .by_category
            .iter_mut()
            .find(|c| c.transaction_type == tx.transaction_type && c.category == tx.category)
        {
            Some(entry) => {
                entry.total += tx.amount;
                entry.transaction_count += 1;
            }
            None => totals.by_category.push(CategoryTotal {
                transaction_type: tx.transaction_type,
                category: tx.category.clone(),
                total: tx.amount,
                transaction_count: 1,
            }),
        }
    }

    totals
}

/// Predicate selecting one calendar month, optionally one account
pub fn in_month(
    month: MonthPeriod,
    account: Option<AccountId>,
) -> impl Fn(&Transaction) -> bool {
    move |t| month.contains(t.date) && account.map_or(true, |id| t.account_id == id)
}

/// Monthly analytics: income, expense, net and both category breakdowns
#[derive(Debug, Clone)]
pub struct MonthlyAnalytics {
    /// The month analysed
    pub month: MonthPeriod,
    /// Account the analysis is restricted to, if any
    pub account: Option<(AccountId, String)>,
    /// Aggregated totals
    pub totals: PeriodTotals,
}

impl MonthlyAnalytics {
    /// Generate the analytics for a month from storage
    pub fn generate(
        storage: &Storage,
        month: MonthPeriod,
        account: Option<AccountId>,
    ) -> MoneyResult<Self> {
        storage.read(|ledger| {
            let mut report = Self::from_transactions(ledger.transactions(), month, account);
            report.account = account.map(|id| (id, ledger.account_name(id).to_string()));
            report
        })
    }

    /// Compute the analytics over an explicit transaction set
    pub fn from_transactions(
        transactions: &[Transaction],
        month: MonthPeriod,
        account: Option<AccountId>,
    ) -> Self {
        Self {
            month,
            account: account.map(|id| (id, id.to_string())),
            totals: aggregate(transactions, None, in_month(month, account)),
        }
    }

    /// Income minus expense
    pub fn net(&self) -> Money {
        self.totals.net()
    }

    /// Share of a category within its type's total, in percent
    pub fn share(&self, category: &CategoryTotal) -> f64 {
        let whole = self.totals.total(category.transaction_type).yen();
        if whole == 0 {
            0.0
        } else {
            category.total.yen() as f64 / whole as f64 * 100.0
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Monthly Analytics: {}", self.month));
        if let Some((_, name)) = &self.account {
            output.push_str(&format!(" ({})", name));
        }
        output.push('\n');
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("Income:  {:>15}\n", self.totals.total_income));
        output.push_str(&format!("Expense: {:>15}\n", self.totals.total_expense));
        output.push_str(&"-".repeat(25));
        output.push('\n');
        output.push_str(&format!(
            "Net:     {:>15}\n",
            self.net().format_signed(crate::models::money::DEFAULT_SYMBOL)
        ));

        for kind in TransactionType::ALL {
            output.push_str(&format!(
                "\n{} by category\n",
                kind.to_string().to_uppercase()
            ));
            output.push_str(&format!(
                "  {:<30} {:>12} {:>6} {:>7}\n",
                "Category", "Amount", "Count", "%"
            ));
            output.push_str(&"-".repeat(60));
            output.push('\n');

            let mut any = false;
            for category in self.totals.categories(kind) {
                any = true;
                output.push_str(&format!(
                    "  {:<30} {:>12} {:>6} {:>6.1}%\n",
                    category.category,
                    category.total,
                    category.transaction_count,
                    self.share(category)
                ));
            }
            if !any {
                output.push_str("  (no data)\n");
            }
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> MoneyResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Month", "Type", "Category", "Amount", "Count"])?;

        for category in &self.totals.by_category {
            csv.write_record([
                self.month.to_string(),
                category.transaction_type.to_string(),
                category.category.clone(),
                category.total.yen().to_string(),
                category.transaction_count.to_string(),
            ])?;
        }

        let month = self.month.to_string();
        for (label, value) in [
            ("Total Income", self.totals.total_income),
            ("Total Expense", self.totals.total_expense),
            ("Net", self.net()),
        ] {
            let amount = value.yen().to_string();
            csv.write_record([month.as_str(), "SUMMARY", label, amount.as_str(), ""])?;
        }

        csv.flush()?;
        Ok(())
    }
}
