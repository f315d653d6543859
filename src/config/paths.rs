//! Path management for money-manager
//!
//! ## Path Resolution Order
//!
//! 1. `MONEY_MANAGER_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (`~/.config/money-manager` on Linux, `~/Library/Application Support/money-manager`
//!    on macOS, `%APPDATA%\money-manager\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::MoneyError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "MONEY_MANAGER_DATA_DIR";

/// Manages all paths used by money-manager
#[derive(Debug, Clone)]
pub struct MoneyPaths {
    base_dir: PathBuf,
}

impl MoneyPaths {
    /// Resolve paths from the environment or the platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, MoneyError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create MoneyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the default export directory (`<base>/exports/`)
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the ledger document
    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir().join("ledger.json")
    }

    /// Ensure the base, data and export directories exist
    pub fn ensure_directories(&self) -> Result<(), MoneyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MoneyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MoneyError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| MoneyError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// Check if money-manager has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, MoneyError> {
    ProjectDirs::from("", "", "money-manager")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| MoneyError::Config("Could not determine home directory".into()))
}
