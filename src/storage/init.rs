//! Storage initialization
//!
//! Handles first-run setup: settings file and a starter ledger.

use crate::config::paths::MoneyPaths;
use crate::config::settings::Settings;
use crate::error::MoneyError;

use super::file_io::write_json_atomic;
use super::ledger::Ledger;

/// Initialize storage for a fresh installation
///
/// Writes default settings and the starter ledger (two empty accounts plus
/// the starter categories). Existing files are never overwritten.
pub fn initialize_storage(paths: &MoneyPaths) -> Result<(), MoneyError> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
    }

    if !paths.ledger_file().exists() {
        write_json_atomic(paths.ledger_file(), &Ledger::starter())?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &MoneyPaths) -> bool {
    !paths.settings_file().exists() || !paths.ledger_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountId, CategoryTaxonomy};
    use crate::storage::read_json;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));

        initialize_storage(&paths).unwrap();

        assert!(!needs_initialization(&paths));
        assert!(paths.settings_file().exists());
        assert!(paths.ledger_file().exists());
        assert!(paths.export_dir().exists());

        let ledger: Ledger = read_json(paths.ledger_file()).unwrap().unwrap();
        assert_eq!(ledger, Ledger::starter());
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        let custom = Ledger::from_parts(
            vec![Account::new(AccountId::from_raw(7), "Custom")],
            Vec::new(),
            CategoryTaxonomy::empty(),
        );
        write_json_atomic(paths.ledger_file(), &custom).unwrap();

        initialize_storage(&paths).unwrap();

        let ledger: Ledger = read_json(paths.ledger_file()).unwrap().unwrap();
        assert_eq!(ledger.accounts().len(), 1);
        assert_eq!(ledger.accounts()[0].name, "Custom");
    }
}
