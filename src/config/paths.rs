//! Path management for FlexiBudget
//!
//! Provides XDG-compliant path resolution for the local data directory
//! holding the three persisted store namespaces.
//!
//! ## Path Resolution Order
//!
//! 1. `FLEXIBUDGET_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/flexibudget` or `~/.config/flexibudget`
//! 3. Windows: `%APPDATA%\flexibudget`

use std::path::PathBuf;

use crate::error::FlexiError;

/// Manages all paths used by FlexiBudget
#[derive(Debug, Clone)]
pub struct FlexiPaths {
    /// Base directory for all FlexiBudget data
    base_dir: PathBuf,
}

impl FlexiPaths {
    /// Create a new FlexiPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FlexiError> {
        let base_dir = if let Ok(custom) = std::env::var("FLEXIBUDGET_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FlexiPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/flexibudget/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/flexibudget/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to categories.json
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path to settings.json
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir().join("settings.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), FlexiError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FlexiError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FlexiError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FlexiError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| FlexiError::Config("Could not determine home directory".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("flexibudget"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FlexiError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FlexiError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("flexibudget"))
}
