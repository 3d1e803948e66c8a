//! Storage initialization
//!
//! Handles first-run setup: seeds the starter categories and the default
//! settings record so a fresh data directory is immediately usable.

use crate::config::paths::FlexiPaths;
use crate::error::FlexiError;
use crate::models::{Category, EntryKind, Pillar, Settings};

use super::categories::CategoryData;
use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Creates seed data only for the namespaces whose files are missing, so an
/// existing data set is never overwritten.
pub fn initialize_storage(paths: &FlexiPaths) -> Result<(), FlexiError> {
    paths.ensure_directories()?;

    if !paths.categories_file().exists() {
        create_default_categories(paths)?;
    }

    if !paths.settings_file().exists() {
        write_json_atomic(paths.settings_file(), &Settings::default())?;
    }

    Ok(())
}

/// Create the starter categories a fresh install ships with
fn create_default_categories(paths: &FlexiPaths) -> Result<(), FlexiError> {
    let categories = vec![
        Category::new("Loyer", EntryKind::Expense, Some(Pillar::Needs)),
        Category::new("Courses", EntryKind::Expense, Some(Pillar::Needs)),
        Category::new("Restaurant", EntryKind::Expense, Some(Pillar::Wants)),
        Category::new("Livret A", EntryKind::Expense, Some(Pillar::Savings)),
        Category::new("Salaire", EntryKind::Income, None),
        Category::new("Ventes en ligne", EntryKind::Income, None),
    ];

    let data = CategoryData { categories };
    write_json_atomic(paths.categories_file(), &data)?;

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &FlexiPaths) -> bool {
    !paths.categories_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::Storage;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_seeds_categories_and_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FlexiPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));
        initialize_storage(&paths).unwrap();
        assert!(!needs_initialization(&paths));

        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let categories = storage.categories.get_all().unwrap();
        assert_eq!(categories.len(), 6);
        assert!(categories
            .iter()
            .any(|c| c.name == "Loyer" && c.pillar == Some(Pillar::Needs)));
        assert!(categories
            .iter()
            .any(|c| c.name == "Salaire" && c.kind == EntryKind::Income && c.pillar.is_none()));

        assert_eq!(storage.settings.get().unwrap(), Settings::default());
    }

    #[test]
    fn test_initialize_does_not_overwrite_existing_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FlexiPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        // Wipe the seeded categories and write an empty collection
        let data = CategoryData { categories: vec![] };
        write_json_atomic(paths.categories_file(), &data).unwrap();

        // A second init must leave the emptied file alone
        initialize_storage(&paths).unwrap();

        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        assert_eq!(storage.categories.count().unwrap(), 0);
    }
}
