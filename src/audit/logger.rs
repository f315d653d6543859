//! Append-only audit trail
//!
//! One JSON document per line. Lines are appended after the ledger change
//! they describe has been committed, never rewritten.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{MoneyError, MoneyResult};

use super::entry::AuditEntry;

/// Writer and reader for the audit trail file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry as a JSON line
    pub fn log(&self, entry: &AuditEntry) -> MoneyResult<()> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| self.io_error("open", e))?;

        // Whole line in one write
        file.write_all(&line).map_err(|e| self.io_error("append to", e))
    }

    /// Every entry in the trail, oldest first
    pub fn read_all(&self) -> MoneyResult<Vec<AuditEntry>> {
        if !self.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path).map_err(|e| self.io_error("open", e))?;

        serde_json::Deserializer::from_reader(BufReader::new(file))
            .into_iter::<AuditEntry>()
            .enumerate()
            .map(|(index, entry)| {
                entry.map_err(|e| {
                    MoneyError::Json(format!("Audit entry #{} is unreadable: {}", index + 1, e))
                })
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> MoneyResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        entries.drain(..skip);
        Ok(entries)
    }

    pub fn exists(&self) -> bool {
        self.log_path.is_file()
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }

    fn io_error(&self, action: &str, e: std::io::Error) -> MoneyError {
        MoneyError::Io(format!("Could not {} {}: {}", action, self.log_path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use serde_json::json;
    use tempfile::TempDir;

    fn logger_in(temp_dir: &TempDir) -> AuditLogger {
        AuditLogger::new(temp_dir.path().join("audit.log"))
    }

    #[test]
    fn test_log_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);

        logger
            .log(&AuditEntry::create(
                EntityType::Account,
                "1",
                Some("Wallet".to_string()),
                &json!({"name": "Wallet", "balance": 0}),
            ))
            .unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::Account);

        let raw = std::fs::read_to_string(logger.path()).unwrap();
        assert_eq!(raw.lines().count(), 1);
    }

    #[test]
    fn test_read_recent_keeps_tail_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);
        for i in 0..5 {
            logger
                .log(&AuditEntry::delete(EntityType::Category, "expense", Some(format!("Cat {}", i))))
                .unwrap();
        }

        let recent = logger.read_recent(2).unwrap();
        let names: Vec<_> = recent.iter().filter_map(|e| e.entity_name.as_deref()).collect();
        assert_eq!(names, ["Cat 3", "Cat 4"]);

        assert_eq!(logger.read_recent(50).unwrap().len(), 5);
    }

    #[test]
    fn test_missing_log_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);
        assert!(!logger.exists());
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_line_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);
        logger.log(&AuditEntry::import("1 accounts")).unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(logger.path())
            .unwrap()
            .write_all(b"{ not an entry\n")
            .unwrap();

        assert!(matches!(logger.read_all(), Err(MoneyError::Json(_))));
    }
}
