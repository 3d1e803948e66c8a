//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json. The collection
//! keeps insertion order; display grouping happens in the service layer.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FlexiError;
use crate::models::{Category, CategoryId};

use super::file_io::{read_json, remove_if_exists, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct CategoryData {
    pub categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    data: RwLock<Vec<Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), FlexiError> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.categories;
        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), FlexiError> {
        let data = self
            .data
            .read()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = CategoryData {
            categories: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, FlexiError> {
        let data = self
            .data
            .read()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|c| c.id == id).cloned())
    }

    /// Get all categories in insertion order
    pub fn get_all(&self) -> Result<Vec<Category>, FlexiError> {
        let data = self
            .data
            .read()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Append a new category
    pub fn insert(&self, category: Category) -> Result<(), FlexiError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(category);
        Ok(())
    }

    /// Replace an existing category in place
    ///
    /// Returns false if no category with the given id exists.
    pub fn update(&self, category: Category) -> Result<bool, FlexiError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|c| c.id == category.id) {
            Some(slot) => {
                *slot = category;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete a category by ID
    ///
    /// Returns false if no category with the given id existed.
    pub fn delete(&self, id: CategoryId) -> Result<bool, FlexiError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|c| c.id != id);
        Ok(data.len() != before)
    }

    /// Count categories
    pub fn count(&self) -> Result<usize, FlexiError> {
        let data = self
            .data
            .read()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }

    /// Drop the in-memory collection and the backing file
    pub fn reset(&self) -> Result<(), FlexiError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        remove_if_exists(&self.path)
    }
}
