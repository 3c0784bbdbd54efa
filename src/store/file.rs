//! Durable file-backed store with atomic writes
//!
//! Each collection lives in its own `<name>.json` document under the data
//! directory. Writes go to a temp file, are flushed and synced, then renamed
//! over the target, so a crash mid-write won't corrupt existing data.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};

use super::Store;

/// Store backed by one JSON document per collection
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store at the resolved data directory, creating it if needed
    pub fn open(paths: &LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;
        Ok(Self {
            dir: paths.data_dir(),
        })
    }

    /// Open the store over an explicit directory (useful for testing)
    pub fn with_dir(dir: impl Into<PathBuf>) -> LedgerResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create store directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        Ok(Self { dir })
    }

    /// The directory collection documents live in
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        let path = self.slot_path(key);

        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path).map(Some).map_err(|e| {
            LedgerError::Storage(format!("Failed to read {}: {}", path.display(), e))
        })
    }

    fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        let path = self.slot_path(key);

        // Ensure the directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // Temp file in the same directory (important for atomic rename)
        let temp_path = path.with_extension("json.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(value.as_bytes())
            .map_err(|e| LedgerError::Storage(format!("Failed to write data: {}", e)))?;

        writer
            .flush()
            .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

        // Sync to disk before rename
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(|e| {
            // Try to clean up temp file if rename fails
            let _ = fs::remove_file(&temp_path);
            LedgerError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }

    fn remove(&self, key: &str) -> LedgerResult<()> {
        let path = self.slot_path(key);

        if !path.exists() {
            return Ok(());
        }

        fs::remove_file(&path).map_err(|e| {
            LedgerError::Storage(format!("Failed to remove {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, FileStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::with_dir(temp_dir.path().join("data")).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_get_missing_returns_none() {
        let (_temp_dir, store) = test_store();
        assert_eq!(store.get("budgets").unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let (_temp_dir, store) = test_store();

        store.set("budgets", "[1,2,3]").unwrap();
        assert_eq!(store.get("budgets").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn test_set_replaces_content() {
        let (_temp_dir, store) = test_store();

        store.set("budgets", "[1]").unwrap();
        store.set("budgets", "[2]").unwrap();
        assert_eq!(store.get("budgets").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let (_temp_dir, store) = test_store();

        store.set("budgets", "[]").unwrap();

        assert!(store.dir().join("budgets.json").exists());
        assert!(!store.dir().join("budgets.json.tmp").exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_temp_dir, store) = test_store();

        store.set("budgets", "[]").unwrap();
        store.remove("budgets").unwrap();
        assert_eq!(store.get("budgets").unwrap(), None);

        // Removing again is fine
        store.remove("budgets").unwrap();
    }

    #[test]
    fn test_set_recreates_missing_directory() {
        let (_temp_dir, store) = test_store();

        fs::remove_dir_all(store.dir()).unwrap();
        store.set("budgets", "[]").unwrap();
        assert_eq!(store.get("budgets").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_keys_are_independent() {
        let (_temp_dir, store) = test_store();

        store.set("budgets", "[1]").unwrap();
        store.set("expenses", "[2]").unwrap();
        store.remove("budgets").unwrap();

        assert_eq!(store.get("budgets").unwrap(), None);
        assert_eq!(store.get("expenses").unwrap().as_deref(), Some("[2]"));
    }
}
