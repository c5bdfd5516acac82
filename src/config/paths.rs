//! Path management for balance-history
//!
//! Provides XDG-compliant path resolution for the settings file, the log
//! file and exported reports.
//!
//! ## Path Resolution Order
//!
//! 1. `BALANCE_HISTORY_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/balance-history` or `~/.config/balance-history`
//! 3. Windows: `%APPDATA%\balance-history`

use std::path::PathBuf;

use crate::error::HistoryError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "BALANCE_HISTORY_DIR";

/// Manages all paths used by balance-history
#[derive(Debug, Clone)]
pub struct HistoryPaths {
    /// Base directory for all balance-history files
    base_dir: PathBuf,
}

impl HistoryPaths {
    /// Create a new HistoryPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, HistoryError> {
        let base_dir = if let Ok(custom) = std::env::var(DIR_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create HistoryPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/balance-history/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("balance-history.log")
    }

    /// Get the default directory for exported reports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base and export directories exist
    pub fn ensure_directories(&self) -> Result<(), HistoryError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| HistoryError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| HistoryError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default base directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, HistoryError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| HistoryError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("balance-history"))
}

/// Resolve the default base directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, HistoryError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| HistoryError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("balance-history"))
}
