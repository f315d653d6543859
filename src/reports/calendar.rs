//! Calendar aggregation
//!
//! Per-day income and expense totals for one month, the month grid built on
//! them and the listing of a single day's transactions.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{Datelike, NaiveDate};

use crate::error::MoneyResult;
use crate::models::{Money, MonthPeriod, Transaction, TransactionType};
use crate::storage::{Ledger, Storage};

/// Income and expense recorded on one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayTotals {
    pub income: Money,
    pub expense: Money,
}

impl DayTotals {
    /// True when nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.income.is_zero() && self.expense.is_zero()
    }
}

/// Per-day totals for a month, keyed by day of month
///
/// Only days with at least one transaction appear. An invalid month yields
/// an empty map.
pub fn daily_totals(
    transactions: &[Transaction],
    year: i32,
    month: u32,
) -> BTreeMap<u32, DayTotals> {
    let mut days: BTreeMap<u32, DayTotals> = BTreeMap::new();

    let Some(period) = MonthPeriod::new(year, month) else {
        return days;
    };

    for tx in transactions.iter().filter(|t| period.contains(t.date)) {
        let totals = days.entry(tx.date.day()).or_default();
        match tx.transaction_type {
            TransactionType::Income => totals.income += tx.amount,
            TransactionType::Expense => totals.expense += tx.amount,
        }
    }

    days
}

/// One transaction of a day listing
#[derive(Debug, Clone)]
pub struct DayEntry {
    pub transaction: Transaction,
    /// Resolved account name, "Unknown" if the account is gone
    pub account_name: String,
}

/// Transactions dated `date`, in recorded order
pub fn transactions_on(ledger: &Ledger, date: NaiveDate) -> Vec<DayEntry> {
    ledger
        .transactions()
        .iter()
        .filter(|t| t.date == date)
        .map(|t| DayEntry {
            transaction: t.clone(),
            account_name: ledger.account_name(t.account_id).to_string(),
        })
        .collect()
}

/// A cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub totals: DayTotals,
    pub is_today: bool,
}

/// A month laid out as a calendar grid
#[derive(Debug, Clone)]
pub struct CalendarMonth {
    pub month: MonthPeriod,
    /// Whether weeks start on Monday instead of Sunday
    pub week_starts_monday: bool,
    /// Empty cells before the 1st
    pub leading_blanks: u32,
    /// Every day of the month
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    /// Generate the grid for a month from storage, marking today's date
    pub fn generate(
        storage: &Storage,
        month: MonthPeriod,
        week_starts_monday: bool,
    ) -> MoneyResult<Self> {
        let today = chrono::Local::now().date_naive();
        storage.read(|ledger| Self::build(ledger.transactions(), month, week_starts_monday, today))
    }

    /// Lay out the grid over an explicit transaction set
    pub fn build(
        transactions: &[Transaction],
        month: MonthPeriod,
        week_starts_monday: bool,
        today: NaiveDate,
    ) -> Self {
        let totals = daily_totals(transactions, month.year(), month.month());
        let first = month.start_date().weekday();
        let leading_blanks = if week_starts_monday {
            first.num_days_from_monday()
        } else {
            first.num_days_from_sunday()
        };

        let days = (1..=month.days_in_month())
            .filter_map(|d| month.day(d))
            .map(|date| CalendarDay {
                date,
                totals: totals.get(&date.day()).copied().unwrap_or_default(),
                is_today: date == today,
            })
            .collect();

        Self {
            month,
            week_starts_monday,
            leading_blanks,
            days,
        }
    }

    /// Month totals summed from the days
    pub fn totals(&self) -> DayTotals {
        self.days.iter().fold(DayTotals::default(), |acc, d| DayTotals {
            income: acc.income + d.totals.income,
            expense: acc.expense + d.totals.expense,
        })
    }

    /// Format the grid for terminal display
    ///
    /// Each week is three lines: day numbers (today marked with `*`), income
    /// and expense. Amounts are shown without the currency symbol.
    pub fn format_terminal(&self) -> String {
        const CELL: usize = 10;
        let headers = if self.week_starts_monday {
            ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        } else {
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        };

        let mut output = String::new();
        output.push_str(&format!("Calendar: {}\n", self.month));
        output.push_str(&"=".repeat(CELL * 7));
        output.push('\n');
        for header in headers {
            output.push_str(&format!("{:>width$}", header, width = CELL));
        }
        output.push('\n');

        let mut cells: Vec<Option<&CalendarDay>> = vec![None; self.leading_blanks as usize];
        cells.extend(self.days.iter().map(Some));

        for week in cells.chunks(7) {
            let mut day_line = String::new();
            let mut income_line = String::new();
            let mut expense_line = String::new();

            for cell in week {
                match cell {
                    Some(day) => {
                        let marker = if day.is_today { "*" } else { "" };
                        day_line.push_str(&format!(
                            "{:>width$}",
                            format!("{}{}", marker, day.date.day()),
                            width = CELL
                        ));
                        income_line.push_str(&format!(
                            "{:>width$}",
                            compact(day.totals.income, '+'),
                            width = CELL
                        ));
                        expense_line.push_str(&format!(
                            "{:>width$}",
                            compact(day.totals.expense, '-'),
                            width = CELL
                        ));
                    }
                    None => {
                        for line in [&mut day_line, &mut income_line, &mut expense_line] {
                            line.push_str(&" ".repeat(CELL));
                        }
                    }
                }
            }

            for line in [day_line, income_line, expense_line] {
                output.push_str(line.trim_end());
                output.push('\n');
            }
        }

        let totals = self.totals();
        output.push_str(&"-".repeat(CELL * 7));
        output.push('\n');
        output.push_str(&format!(
            "Income: {}   Expense: {}\n",
            totals.income, totals.expense
        ));

        output
    }

    /// Export days that have data to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> MoneyResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Date", "Income", "Expense"])?;

        for day in self.days.iter().filter(|d| !d.totals.is_empty()) {
            csv.write_record([
                day.date.to_string(),
                day.totals.income.yen().to_string(),
                day.totals.expense.yen().to_string(),
            ])?;
        }

        csv.flush()?;
        Ok(())
    }
}

fn compact(amount: Money, sign: char) -> String {
    if amount.is_zero() {
        String::new()
    } else {
        format!("{}{}", sign, amount.format_with_symbol(""))
    }
}

/// Listing of one day's transactions
#[derive(Debug, Clone)]
pub struct DayReport {
    pub date: NaiveDate,
    pub entries: Vec<DayEntry>,
}

impl DayReport {
    /// Generate the listing from storage
    pub fn generate(storage: &Storage, date: NaiveDate) -> MoneyResult<Self> {
        let entries = storage.read(|ledger| transactions_on(ledger, date))?;
        Ok(Self { date, entries })
    }

    /// Format the listing for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = format!("Transactions on {}\n", self.date);
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.entries.is_empty() {
            output.push_str("No transactions.\n");
            return output;
        }

        for entry in &self.entries {
            let tx = &entry.transaction;
            output.push_str(&format!(
                "{:<16} {:>12}  {:<12} {}\n",
                tx.category,
                tx.signed_amount()
                    .format_signed(crate::models::money::DEFAULT_SYMBOL),
                entry.account_name,
                tx.description_or_empty()
            ));
        }

        output
    }
}
