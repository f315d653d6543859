//! Storage layer for money-manager
//!
//! The whole ledger lives in one JSON document that is loaded at startup and
//! rewritten atomically after every mutation. `Storage` owns the in-memory
//! copy; services borrow it and route every change through [`Storage::mutate`].

pub mod file_io;
pub mod init;
pub mod ledger;

pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use ledger::{Ledger, UNKNOWN_ACCOUNT};

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::MoneyPaths;
use crate::error::{MoneyError, MoneyResult};

/// How the ledger came to be in memory after [`Storage::load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// No ledger file existed; the starter ledger is in memory
    Fresh,
    /// The ledger file was read successfully
    Loaded,
    /// The ledger file could not be parsed; the starter ledger is in memory
    Recovered,
}

/// Owner of the in-memory ledger and its persistence
pub struct Storage {
    paths: MoneyPaths,
    ledger: RwLock<Ledger>,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance holding the starter ledger
    pub fn new(paths: MoneyPaths) -> MoneyResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: RwLock::new(Ledger::starter()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &MoneyPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load the ledger from disk
    ///
    /// A document that fails to parse is discarded in favour of the starter
    /// ledger; the file itself is left alone until the next save.
    pub fn load(&self) -> MoneyResult<LoadStatus> {
        let path = self.paths.ledger_file();
        let (ledger, status) = match read_json::<Ledger, _>(&path) {
            Ok(Some(ledger)) => (ledger, LoadStatus::Loaded),
            Ok(None) => (Ledger::starter(), LoadStatus::Fresh),
            Err(MoneyError::Json(reason)) => {
                tracing::warn!(%reason, "ledger file is malformed, starting from an empty ledger");
                (Ledger::starter(), LoadStatus::Recovered)
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(
            path = %path.display(),
            accounts = ledger.accounts().len(),
            transactions = ledger.transactions().len(),
            ?status,
            "ledger loaded"
        );

        *self.write_lock()? = ledger;
        Ok(status)
    }

    /// Persist the current ledger
    pub fn save(&self) -> MoneyResult<()> {
        let ledger = self.read_lock()?;
        write_json_atomic(self.paths.ledger_file(), &*ledger)
    }

    /// Run a read-only computation against the ledger
    pub fn read<R>(&self, f: impl FnOnce(&Ledger) -> R) -> MoneyResult<R> {
        let ledger = self.read_lock()?;
        Ok(f(&ledger))
    }

    /// Clone the current ledger
    pub fn snapshot(&self) -> MoneyResult<Ledger> {
        self.read(Ledger::clone)
    }

    /// Apply a mutation and persist the result
    ///
    /// Either the closure's changes are applied in memory *and* written to
    /// disk, or the ledger is restored to exactly its previous state.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut Ledger) -> MoneyResult<R>) -> MoneyResult<R> {
        let mut ledger = self.write_lock()?;
        let before = ledger.clone();

        let result = match f(&mut ledger) {
            Ok(result) => result,
            Err(e) => {
                *ledger = before;
                return Err(e);
            }
        };

        if let Err(e) = write_json_atomic(self.paths.ledger_file(), &*ledger) {
            tracing::warn!(error = %e, "failed to persist ledger, rolling back");
            *ledger = before;
            return Err(e);
        }

        Ok(result)
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.log_entry(&AuditEntry::create(entity_type, entity_id, entity_name, entity));
    }

    /// Record an arbitrary entry in the audit log
    ///
    /// Called after the ledger change has been committed, so a failed write
    /// is only reported as a warning.
    pub fn log_entry(&self, entry: &AuditEntry) {
        if let Err(e) = self.audit.log(entry) {
            tracing::warn!(
                error = %e,
                operation = %entry.operation,
                entity = %entry.entity_type,
                "failed to write audit entry"
            );
        }
    }

    /// Check if storage has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    fn read_lock(&self) -> MoneyResult<RwLockReadGuard<'_, Ledger>> {
        self.ledger
            .read()
            .map_err(|e| MoneyError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> MoneyResult<RwLockWriteGuard<'_, Ledger>> {
        self.ledger
            .write()
            .map_err(|e| MoneyError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
