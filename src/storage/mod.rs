//! Storage layer for FlexiBudget
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation: one file per store namespace (categories, transactions,
//! settings), each independently loadable and clearable.

pub mod categories;
pub mod file_io;
pub mod init;
pub mod settings;
pub mod transactions;

pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::{initialize_storage, needs_initialization};
pub use settings::SettingsRepository;
pub use transactions::TransactionRepository;

use crate::config::paths::FlexiPaths;
use crate::error::FlexiError;
use crate::events::ChangeNotifier;

/// Main storage coordinator that provides access to all repositories
///
/// Constructed once per application instance and passed by reference to the
/// services (no global state). Also owns the change notifier the services
/// emit on after successful mutations.
pub struct Storage {
    paths: FlexiPaths,
    pub categories: CategoryRepository,
    pub transactions: TransactionRepository,
    pub settings: SettingsRepository,
    pub notifier: ChangeNotifier,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FlexiPaths) -> Result<Self, FlexiError> {
        paths.ensure_directories()?;

        Ok(Self {
            categories: CategoryRepository::new(paths.categories_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            settings: SettingsRepository::new(paths.settings_file()),
            notifier: ChangeNotifier::new(),
            paths,
        })
    }

    /// Create, seed (first run only) and load in one step
    pub fn open(paths: FlexiPaths) -> Result<Self, FlexiError> {
        initialize_storage(&paths)?;
        let storage = Self::new(paths)?;
        storage.load_all()?;
        Ok(storage)
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FlexiPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), FlexiError> {
        self.categories.load()?;
        self.transactions.load()?;
        self.settings.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FlexiError> {
        self.categories.save()?;
        self.transactions.save()?;
        self.settings.save()?;
        Ok(())
    }

    /// Clear all three namespaces (full reset)
    ///
    /// Removes the persisted files and restores in-memory defaults. The
    /// consuming application is expected to re-run [`initialize_storage`]
    /// (or `open`) afterwards if it wants the seed data back.
    pub fn reset(&self) -> Result<(), FlexiError> {
        self.categories.reset()?;
        self.transactions.reset()?;
        self.settings.reset()?;
        Ok(())
    }
}
