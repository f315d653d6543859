//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::MoneyError;

/// Read JSON from a file; `Ok(None)` if the file doesn't exist
///
/// Read failures are reported as `MoneyError::Io`. Anything wrong with the
/// bytes themselves, invalid UTF-8 included, is `MoneyError::Json`.
pub fn read_json<T, P>(path: P) -> Result<Option<T>, MoneyError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let bytes = fs::read(path)
        .map_err(|e| MoneyError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| MoneyError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), MoneyError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            MoneyError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| MoneyError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| MoneyError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| MoneyError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| MoneyError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        MoneyError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let data: Option<TestData> = read_json(temp_dir.path().join("missing.json")).unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        write_json_atomic(&path, &data).unwrap();
        assert!(!temp_dir.path().join("nested").join("test.json.tmp").exists());

        let loaded: Option<TestData> = read_json(&path).unwrap();
        assert_eq!(loaded, Some(data));
    }

    #[test]
    fn test_malformed_is_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "not json at all").unwrap();

        let result: Result<Option<TestData>, _> = read_json(&path);
        assert!(matches!(result, Err(MoneyError::Json(_))));
    }

    #[test]
    fn test_invalid_utf8_is_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.json");
        fs::write(&path, [0xff, 0xfe, 0x7b, 0x00]).unwrap();

        let result: Result<Option<TestData>, _> = read_json(&path);
        assert!(matches!(result, Err(MoneyError::Json(_))));
    }
}
