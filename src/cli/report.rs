//! CLI commands for reports
//!
//! Reports print to the terminal, or with `--output` write CSV to a file.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{MoneyError, MoneyResult};
use crate::reports::{AssetTrendReport, CalendarMonth, DashboardReport, DayReport, MonthlyAnalytics};
use crate::storage::Storage;

use super::{create_output, parse_month, resolve_account_filter};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Total balance, this month's breakdowns and recent transactions
    Dashboard {
        /// Restrict this month's breakdowns to one account
        #[arg(short, long)]
        account: Option<String>,
    },
    /// Monthly income, expense, net and category breakdowns
    Month {
        /// Month (YYYY-MM, default current)
        #[arg(short, long)]
        month: Option<String>,
        /// Restrict to one account
        #[arg(short, long)]
        account: Option<String>,
        /// Write CSV to this file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Total balance now and at prior month-ends
    Trend {
        /// Number of points, including "now"
        #[arg(short, long)]
        points: Option<usize>,
        /// Month to walk back from (YYYY-MM, default current)
        #[arg(short, long)]
        month: Option<String>,
        /// Write CSV to this file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Daily income and expense for a month
    Calendar {
        /// Month (YYYY-MM, default current)
        #[arg(short, long)]
        month: Option<String>,
        /// List the transactions of one day of the month
        #[arg(short, long)]
        day: Option<u32>,
        /// Write CSV to this file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> MoneyResult<()> {
    match cmd {
        ReportCommands::Dashboard { account } => {
            let account = resolve_account_filter(storage, account.as_deref())?;
            let report = DashboardReport::generate(
                storage,
                crate::models::MonthPeriod::current(),
                account,
                settings.recent_transactions,
            )?;
            print!("{}", report.format_terminal());
        }

        ReportCommands::Month {
            month,
            account,
            output,
        } => {
            let month = parse_month(month.as_deref())?;
            let account = resolve_account_filter(storage, account.as_deref())?;
            let report = MonthlyAnalytics::generate(storage, month, account)?;

            match output {
                Some(path) => write_csv(&path, |w| report.export_csv(w))?,
                None => print!("{}", report.format_terminal()),
            }
        }

        ReportCommands::Trend {
            points,
            month,
            output,
        } => {
            let anchor = parse_month(month.as_deref())?;
            let points = points.unwrap_or(settings.history_points);
            let report = AssetTrendReport::generate(storage, points, anchor)?;

            match output {
                Some(path) => write_csv(&path, |w| report.export_csv(w))?,
                None => print!("{}", report.format_terminal()),
            }
        }

        ReportCommands::Calendar { month, day, output } => {
            let month = parse_month(month.as_deref())?;

            if let Some(day) = day {
                let date = month.day(day).ok_or_else(|| {
                    MoneyError::Validation(format!("{} has no day {}", month, day))
                })?;
                print!("{}", DayReport::generate(storage, date)?.format_terminal());
                return Ok(());
            }

            let report = CalendarMonth::generate(storage, month, settings.week_starts_monday())?;
            match output {
                Some(path) => write_csv(&path, |w| report.export_csv(w))?,
                None => print!("{}", report.format_terminal()),
            }
        }
    }

    Ok(())
}

fn write_csv<F>(path: &Path, export: F) -> MoneyResult<()>
where
    F: FnOnce(&mut dyn Write) -> MoneyResult<()>,
{
    let mut writer = create_output(path)?;
    export(&mut writer)?;
    writer.flush()?;
    println!("Report exported to: {}", path.display());
    Ok(())
}
