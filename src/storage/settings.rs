//! Settings repository for JSON storage
//!
//! A single settings record per data directory; a missing file loads as the
//! default 50/30/20 allocation in EUR.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FlexiError;
use crate::models::Settings;

use super::file_io::{read_json, remove_if_exists, write_json_atomic};

/// Repository for the settings record
pub struct SettingsRepository {
    path: PathBuf,
    data: RwLock<Settings>,
}

impl SettingsRepository {
    /// Create a new settings repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Settings::default()),
        }
    }

    /// Load settings from disk (defaults if the file doesn't exist)
    pub fn load(&self) -> Result<(), FlexiError> {
        let settings: Settings = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = settings;
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), FlexiError> {
        let data = self
            .data
            .read()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get the current settings snapshot
    pub fn get(&self) -> Result<Settings, FlexiError> {
        let data = self
            .data
            .read()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Replace the settings record
    pub fn replace(&self, settings: Settings) -> Result<(), FlexiError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = settings;
        Ok(())
    }

    /// Restore defaults and remove the backing file
    pub fn reset(&self) -> Result<(), FlexiError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = Settings::default();
        remove_if_exists(&self.path)
    }
}
