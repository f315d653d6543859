//! money-manager - Terminal personal finance tracker
//!
//! Records expense and income transactions against accounts, keeps account
//! balances current, and derives every summary from the transaction log:
//! monthly analytics, a per-day calendar and an asset trend reconstructed
//! backwards from today's balances.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, transactions, categories, money)
//! - `storage`: The ledger document and its JSON persistence
//! - `services`: Business logic, including the balance engine
//! - `reports`: Period aggregation, asset history, calendar and dashboard
//! - `export`: CSV and JSON export
//! - `audit`: Audit logging system
//! - `display`: Terminal tables
//! - `cli`: Command handlers for the `money` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use money_manager::config::paths::MoneyPaths;
//! use money_manager::storage::Storage;
//! use money_manager::reports::AssetTrendReport;
//! use money_manager::models::MonthPeriod;
//!
//! let storage = Storage::new(MoneyPaths::new()?)?;
//! storage.load()?;
//! let trend = AssetTrendReport::generate(&storage, 6, MonthPeriod::current())?;
//! print!("{}", trend.format_terminal());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{MoneyError, MoneyResult};
