//! Settings service
//!
//! Business logic for the budget allocation and display currency. Allocation
//! updates are all-or-nothing: the three percentages are validated together
//! and either all replace the stored triple or none do.

use crate::error::{FlexiError, FlexiResult};
use crate::events::StoreChange;
use crate::models::{BudgetAllocation, Settings, SUPPORTED_CURRENCIES};
use crate::storage::Storage;

/// Service for application settings
pub struct SettingsService<'a> {
    storage: &'a Storage,
}

impl<'a> SettingsService<'a> {
    /// Create a new settings service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Get the current settings
    pub fn get(&self) -> FlexiResult<Settings> {
        self.storage.settings.get()
    }

    /// Replace the budget allocation
    ///
    /// The three percentages must sum to exactly 100; an off-by-one triple
    /// is rejected as a whole, never silently normalized.
    pub fn set_allocation(&self, needs: u8, wants: u8, savings: u8) -> FlexiResult<Settings> {
        let allocation = BudgetAllocation::new(needs, wants, savings)
            .map_err(|e| FlexiError::Validation(e.to_string()))?;

        let mut settings = self.storage.settings.get()?;
        settings.allocation = allocation;

        self.storage.settings.replace(settings.clone())?;
        self.storage.settings.save()?;
        self.storage.notifier.emit(StoreChange::Settings);

        Ok(settings)
    }

    /// Change the display currency
    pub fn set_currency(&self, code: &str) -> FlexiResult<Settings> {
        if !Settings::is_supported_currency(code) {
            return Err(FlexiError::Validation(format!(
                "Unsupported currency '{}', expected one of: {}",
                code,
                SUPPORTED_CURRENCIES.join(", ")
            )));
        }

        let mut settings = self.storage.settings.get()?;
        settings.currency = code.to_string();

        self.storage.settings.replace(settings.clone())?;
        self.storage.settings.save()?;
        self.storage.notifier.emit(StoreChange::Settings);

        Ok(settings)
    }
}
