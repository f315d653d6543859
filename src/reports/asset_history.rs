//! Asset history reconstruction
//!
//! No balance snapshots are stored. Past month-end totals are recovered by
//! starting from the current total and undoing each month's transactions,
//! newest month first.

use std::fmt;
use std::io::Write;

use crate::error::MoneyResult;
use crate::models::{Money, MonthPeriod, Transaction};
use crate::services::balance;
use crate::storage::Storage;

/// Label of a point on the asset trend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryLabel {
    /// Current total balance
    Now,
    /// Total balance at the last instant of a month
    MonthEnd(MonthPeriod),
}

impl fmt::Display for HistoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Now => f.pad("Now"),
            Self::MonthEnd(month) => f.pad(&format!("{} end", month)),
        }
    }
}

/// One point of the asset trend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPoint {
    pub label: HistoryLabel,
    pub value: Money,
}

/// Undo every transaction dated within `month`
///
/// Given the total balance at the end of `month`, returns the total balance
/// at its start (the end of the previous month).
pub fn reverse_month(balance: Money, transactions: &[Transaction], month: MonthPeriod) -> Money {
    transactions
        .iter()
        .filter(|t| month.contains(t.date))
        .fold(balance, |running, t| balance::reverse(running, t))
}

/// Reconstruct `num_points` total-balance points, oldest first
///
/// The last point is the current total; each earlier one is the end of a
/// prior month, walking back from `anchor`. Transactions dated after
/// `anchor` are never reversed.
pub fn build_history(
    current_total: Money,
    transactions: &[Transaction],
    num_points: usize,
    anchor: MonthPeriod,
) -> Vec<HistoryPoint> {
    if num_points == 0 {
        return Vec::new();
    }

    let mut points = Vec::with_capacity(num_points);
    points.push(HistoryPoint {
        label: HistoryLabel::Now,
        value: current_total,
    });

    let mut running = current_total;
    let mut month = anchor;
    for _ in 1..num_points {
        running = reverse_month(running, transactions, month);
        month = month.prev();
        points.push(HistoryPoint {
            label: HistoryLabel::MonthEnd(month),
            value: running,
        });
    }

    points.reverse();
    points
}

/// Asset trend report
#[derive(Debug, Clone)]
pub struct AssetTrendReport {
    /// Month the walk starts from (normally the current month)
    pub anchor: MonthPeriod,
    /// Points, oldest first
    pub points: Vec<HistoryPoint>,
}

impl AssetTrendReport {
    /// Generate the trend from storage
    pub fn generate(storage: &Storage, num_points: usize, anchor: MonthPeriod) -> MoneyResult<Self> {
        let points = storage.read(|ledger| {
            build_history(ledger.total_balance(), ledger.transactions(), num_points, anchor)
        })?;

        Ok(Self { anchor, points })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Asset Trend (through {})\n", self.anchor));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.points.is_empty() {
            output.push_str("No points requested.\n");
            return output;
        }

        output.push_str(&format!("{:<14} {:>15} {:>15}\n", "Point", "Total", "Change"));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        let mut previous: Option<Money> = None;
        for point in &self.points {
            let change = previous
                .map(|p| (point.value - p).format_signed(crate::models::money::DEFAULT_SYMBOL))
                .unwrap_or_default();
            output.push_str(&format!(
                "{:<14} {:>15} {:>15}\n",
                point.label, point.value, change
            ));
            previous = Some(point.value);
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> MoneyResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Point", "Total"])?;

        for point in &self.points {
            csv.write_record([point.label.to_string(), point.value.yen().to_string()])?;
        }

        csv.flush()?;
        Ok(())
    }
}
