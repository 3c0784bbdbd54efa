//! In-memory store
//!
//! Drop-in substitute for `FileStore` in tests and ephemeral sessions.
//! Content lives only as long as the store value.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{LedgerError, LedgerResult};

use super::Store;

/// Store backed by a plain in-process map
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of populated slots
    pub fn len(&self) -> usize {
        self.slots.read().map(|s| s.len()).unwrap_or(0)
    }

    /// Check whether no slot is populated
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        let slots = self.slots.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        let mut slots = self.slots.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> LedgerResult<()> {
        let mut slots = self.slots.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        slots.remove(key);
        Ok(())
    }
}
