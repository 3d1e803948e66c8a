//! Category service
//!
//! Provides business logic for category management: CRUD operations with
//! pillar/kind rule enforcement, display grouping, and display-time
//! resolution of dangling references.

use crate::error::{FlexiError, FlexiResult};
use crate::events::StoreChange;
use crate::models::{Category, CategoryId, EntryKind, Pillar};
use crate::storage::Storage;

/// Shown when a transaction references a category that no longer exists
pub const DELETED_CATEGORY_LABEL: &str = "Deleted category";

/// Shown when a transaction has no category at all
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

/// Partial update for a category; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub kind: Option<EntryKind>,
    pub pillar: Option<Pillar>,
}

/// Categories grouped the way the UI displays them:
/// one income column and one column per pillar
#[derive(Debug, Clone, Default)]
pub struct CategoryBoard {
    pub income: Vec<Category>,
    pub needs: Vec<Category>,
    pub wants: Vec<Category>,
    pub savings: Vec<Category>,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    ///
    /// An expense category requires a pillar; an income category silently
    /// drops any pillar it was handed (normalized, not rejected).
    pub fn add(
        &self,
        name: &str,
        kind: EntryKind,
        pillar: Option<Pillar>,
    ) -> FlexiResult<Category> {
        if kind == EntryKind::Expense && pillar.is_none() {
            return Err(FlexiError::Validation(
                "An expense category requires a pillar".into(),
            ));
        }

        let category = Category::new(name.trim(), kind, pillar);
        category
            .validate()
            .map_err(|e| FlexiError::Validation(e.to_string()))?;

        self.storage.categories.insert(category.clone())?;
        self.storage.categories.save()?;
        self.storage.notifier.emit(StoreChange::Categories);

        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> FlexiResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// List all categories in insertion order
    pub fn list(&self) -> FlexiResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// List categories grouped into display columns
    pub fn grouped(&self) -> FlexiResult<CategoryBoard> {
        let mut board = CategoryBoard::default();

        for category in self.storage.categories.get_all()? {
            match (category.kind, category.pillar) {
                (EntryKind::Income, _) => board.income.push(category),
                (EntryKind::Expense, Some(Pillar::Needs)) => board.needs.push(category),
                (EntryKind::Expense, Some(Pillar::Wants)) => board.wants.push(category),
                (EntryKind::Expense, Some(Pillar::Savings)) => board.savings.push(category),
                // Unreachable for data written through this service; tolerate
                // hand-edited files by leaving such entries out of the board.
                (EntryKind::Expense, None) => {}
            }
        }

        Ok(board)
    }

    /// Update a category
    ///
    /// The id never changes. If the resulting kind is income, the pillar is
    /// forced absent regardless of input; if it is expense, the existing
    /// pillar is kept when the update doesn't provide one.
    pub fn update(&self, id: CategoryId, update: CategoryUpdate) -> FlexiResult<Category> {
        let mut category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| FlexiError::category_not_found(id.to_string()))?;

        if let Some(name) = update.name {
            category.name = name.trim().to_string();
        }
        if let Some(kind) = update.kind {
            category.kind = kind;
        }

        category.pillar = match category.kind {
            EntryKind::Income => None,
            EntryKind::Expense => update.pillar.or(category.pillar),
        };

        category
            .validate()
            .map_err(|e| FlexiError::Validation(e.to_string()))?;

        self.storage.categories.update(category.clone())?;
        self.storage.categories.save()?;
        self.storage.notifier.emit(StoreChange::Categories);

        Ok(category)
    }

    /// Delete a category
    ///
    /// Idempotent: deleting a nonexistent id is a no-op. Transactions
    /// referencing the category are left untouched; their stale reference is
    /// resolved at display time via [`Self::display_name`].
    pub fn delete(&self, id: CategoryId) -> FlexiResult<()> {
        let removed = self.storage.categories.delete(id)?;
        if removed {
            self.storage.categories.save()?;
            self.storage.notifier.emit(StoreChange::Categories);
        }
        Ok(())
    }

    /// Resolve a category reference to a display name
    ///
    /// Dangling references (category deleted after the transaction was
    /// written) resolve to [`DELETED_CATEGORY_LABEL`].
    pub fn display_name(&self, category_id: Option<CategoryId>) -> FlexiResult<String> {
        match category_id {
            None => Ok(UNCATEGORIZED_LABEL.to_string()),
            Some(id) => Ok(self
                .storage
                .categories
                .get(id)?
                .map(|c| c.name)
                .unwrap_or_else(|| DELETED_CATEGORY_LABEL.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FlexiPaths;
    use crate::events::StoreChange;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FlexiPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_expense_and_income() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let loyer = service
            .add("Loyer", EntryKind::Expense, Some(Pillar::Needs))
            .unwrap();
        let salaire = service.add("Salaire", EntryKind::Income, None).unwrap();

        let all = service.list().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(loyer.pillar, Some(Pillar::Needs));
        assert_eq!(salaire.pillar, None);
    }

    #[test]
    fn test_add_expense_without_pillar_fails() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let result = service.add("Courses", EntryKind::Expense, None);
        assert!(matches!(result, Err(FlexiError::Validation(_))));
        assert_eq!(service.list().unwrap().len(), 0);
    }

    #[test]
    fn test_add_income_drops_pillar_silently() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let cat = service
            .add("Salaire", EntryKind::Income, Some(Pillar::Wants))
            .unwrap();
        assert_eq!(cat.pillar, None);
    }

    #[test]
    fn test_add_short_name_fails() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let result = service.add(" x ", EntryKind::Income, None);
        assert!(matches!(result, Err(FlexiError::Validation(_))));
    }

    #[test]
    fn test_update_keeps_id_and_pillar() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let cat = service
            .add("Loyer", EntryKind::Expense, Some(Pillar::Needs))
            .unwrap();

        let updated = service
            .update(
                cat.id,
                CategoryUpdate {
                    name: Some("Loyer + charges".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, cat.id);
        assert_eq!(updated.name, "Loyer + charges");
        // Pillar untouched when the update doesn't provide one
        assert_eq!(updated.pillar, Some(Pillar::Needs));
    }

    #[test]
    fn test_update_to_income_forces_pillar_absent() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let cat = service
            .add("Freelance", EntryKind::Expense, Some(Pillar::Wants))
            .unwrap();

        let updated = service
            .update(
                cat.id,
                CategoryUpdate {
                    kind: Some(EntryKind::Income),
                    pillar: Some(Pillar::Needs),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.kind, EntryKind::Income);
        assert_eq!(updated.pillar, None);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let result = service.update(CategoryId::new(), CategoryUpdate::default());
        assert!(matches!(result, Err(FlexiError::NotFound { .. })));
    }

    #[test]
    fn test_delete_idempotent() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let cat = service
            .add("Courses", EntryKind::Expense, Some(Pillar::Needs))
            .unwrap();

        service.delete(cat.id).unwrap();
        service.delete(cat.id).unwrap();
        assert_eq!(service.list().unwrap().len(), 0);
    }

    #[test]
    fn test_grouped_columns() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        service
            .add("Loyer", EntryKind::Expense, Some(Pillar::Needs))
            .unwrap();
        service
            .add("Restaurant", EntryKind::Expense, Some(Pillar::Wants))
            .unwrap();
        service
            .add("Livret A", EntryKind::Expense, Some(Pillar::Savings))
            .unwrap();
        service.add("Salaire", EntryKind::Income, None).unwrap();

        let board = service.grouped().unwrap();
        assert_eq!(board.income.len(), 1);
        assert_eq!(board.needs.len(), 1);
        assert_eq!(board.wants.len(), 1);
        assert_eq!(board.savings.len(), 1);
    }

    #[test]
    fn test_display_name_resolution() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let cat = service
            .add("Courses", EntryKind::Expense, Some(Pillar::Needs))
            .unwrap();

        assert_eq!(service.display_name(Some(cat.id)).unwrap(), "Courses");
        assert_eq!(service.display_name(None).unwrap(), UNCATEGORIZED_LABEL);

        service.delete(cat.id).unwrap();
        assert_eq!(
            service.display_name(Some(cat.id)).unwrap(),
            DELETED_CATEGORY_LABEL
        );
    }

    #[test]
    fn test_mutations_emit_change_signal() {
        let (_temp_dir, storage) = create_test_storage();

        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        storage.notifier.subscribe(move |change| {
            if change == StoreChange::Categories {
                count_clone.fetch_add(1, Ordering::SeqCst);
            }
        });

        let service = CategoryService::new(&storage);
        let cat = service
            .add("Loyer", EntryKind::Expense, Some(Pillar::Needs))
            .unwrap();
        service
            .update(
                cat.id,
                CategoryUpdate {
                    name: Some("Loyer bis".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        service.delete(cat.id).unwrap();
        // Deleting again is a no-op and must not emit
        service.delete(cat.id).unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 3);
    }
}
