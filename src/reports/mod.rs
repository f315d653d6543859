//! Reports module for money-manager
//!
//! Read-only views derived from the ledger: the dashboard, monthly analytics,
//! the calendar and the reconstructed asset trend.

pub mod asset_history;
pub mod calendar;
pub mod dashboard;
pub mod period;

pub use asset_history::{build_history, reverse_month, AssetTrendReport, HistoryLabel, HistoryPoint};
pub use calendar::{daily_totals, transactions_on, CalendarMonth, DayReport, DayTotals};
pub use dashboard::DashboardReport;
pub use period::{aggregate, in_month, CategoryTotal, MonthlyAnalytics, PeriodTotals};
