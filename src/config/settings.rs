//! User settings for money-manager
//!
//! Display preferences and report defaults, persisted as `config.json`.

use serde::{Deserialize, Serialize};

use super::paths::MoneyPaths;
use crate::error::MoneyError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of points in the asset trend ("now" plus prior month-ends)
    #[serde(default = "default_history_points")]
    pub history_points: usize,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// First day of week for the calendar grid (0 = Sunday, 1 = Monday)
    #[serde(default)]
    pub first_day_of_week: u8,

    /// Prefix CSV exports with a UTF-8 byte-order mark
    #[serde(default = "default_true")]
    pub csv_byte_order_mark: bool,

    /// Number of transactions listed on the dashboard
    #[serde(default = "default_recent_transactions")]
    pub recent_transactions: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "¥".to_string()
}

fn default_history_points() -> usize {
    6
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_true() -> bool {
    true
}

fn default_recent_transactions() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            history_points: default_history_points(),
            date_format: default_date_format(),
            first_day_of_week: 0,
            csv_byte_order_mark: true,
            recent_transactions: default_recent_transactions(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    ///
    /// A settings file that cannot be parsed is ignored with a warning and
    /// the defaults are used instead.
    pub fn load_or_create(paths: &MoneyPaths) -> Result<Self, MoneyError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read(&settings_path)
            .map_err(|e| MoneyError::Io(format!("Failed to read settings file: {}", e)))?;

        match serde_json::from_slice(&contents) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(
                    path = %settings_path.display(),
                    error = %e,
                    "settings file is malformed, using defaults"
                );
                Ok(Settings::default())
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MoneyPaths) -> Result<(), MoneyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| MoneyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| MoneyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Whether the calendar grid starts on Monday
    pub fn week_starts_monday(&self) -> bool {
        self.first_day_of_week == 1
    }
}
