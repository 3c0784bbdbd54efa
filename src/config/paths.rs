//! Path management for pocketledger
//!
//! Provides XDG-compliant path resolution for the data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `POCKETLEDGER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_DATA_HOME/pocketledger` or `~/.local/share/pocketledger`
//! 3. Windows: `%APPDATA%\pocketledger`

use std::path::PathBuf;

use crate::error::LedgerError;

/// Manages all paths used by pocketledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Base directory for all pocketledger data
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Create a new LedgerPaths instance
    ///
    /// Path resolution:
    /// 1. `POCKETLEDGER_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_DATA_HOME/pocketledger` or `~/.local/share/pocketledger`
    /// 3. Windows: `%APPDATA%\pocketledger`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = if let Ok(custom) = std::env::var("POCKETLEDGER_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.local/share/pocketledger/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the directory collection documents live in
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the directory export artifacts are written to
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.local/share/pocketledger/)
    /// - Data directory (~/.local/share/pocketledger/data/)
    /// - Export directory (~/.local/share/pocketledger/exports/)
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| LedgerError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| LedgerError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// Check if pocketledger has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    // Unix (Linux/macOS): Use XDG_DATA_HOME if set, otherwise ~/.local/share
    let data_base = match std::env::var("XDG_DATA_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                LedgerError::Config("Could not determine home directory".into())
            })?;
            PathBuf::from(home).join(".local").join("share")
        }
    };
    Ok(data_base.join("pocketledger"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| LedgerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("pocketledger"))
}
