//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json. The
//! collection is kept sorted by date descending at all times; a stable
//! re-sort after every mutation keeps equal-date entries in their existing
//! relative order.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FlexiError;
use crate::models::{MonthKey, Transaction, TransactionId};

use super::file_io::{read_json, remove_if_exists, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct TransactionData {
    pub transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk, restoring the sort invariant
    pub fn load(&self) -> Result<(), FlexiError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.transactions;
        sort_descending(&mut data);
        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), FlexiError> {
        let data = self
            .data
            .read()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = TransactionData {
            transactions: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, FlexiError> {
        let data = self
            .data
            .read()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|t| t.id == id).cloned())
    }

    /// Get the full date-descending snapshot
    pub fn get_all(&self) -> Result<Vec<Transaction>, FlexiError> {
        let data = self
            .data
            .read()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Get transactions whose date falls in the given month
    pub fn get_by_month(&self, month: MonthKey) -> Result<Vec<Transaction>, FlexiError> {
        let data = self
            .data
            .read()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .iter()
            .filter(|t| month.contains(t.date))
            .cloned()
            .collect())
    }

    /// Distinct year-month keys across all transactions, newest first
    pub fn available_months(&self) -> Result<Vec<MonthKey>, FlexiError> {
        let data = self
            .data
            .read()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let months: BTreeSet<MonthKey> =
            data.iter().map(|t| MonthKey::from_date(t.date)).collect();
        Ok(months.into_iter().rev().collect())
    }

    /// Insert a new transaction and restore the sort invariant
    pub fn insert(&self, txn: Transaction) -> Result<(), FlexiError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(txn);
        sort_descending(&mut data);
        Ok(())
    }

    /// Replace an existing transaction and restore the sort invariant
    ///
    /// Returns false if no transaction with the given id exists.
    pub fn update(&self, txn: Transaction) -> Result<bool, FlexiError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|t| t.id == txn.id) {
            Some(slot) => {
                *slot = txn;
                sort_descending(&mut data);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete a transaction by ID
    ///
    /// Returns false if no transaction with the given id existed. Removal
    /// preserves the sort order.
    pub fn delete(&self, id: TransactionId) -> Result<bool, FlexiError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FlexiError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|t| t.id != id);
        Ok(data.len() != before)
    }

    /// Count transactions
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

/// Stable sort by date descending; equal dates keep their relative order
fn sort_descending(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, Money};
    use chrono::NaiveDate;

    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = TransactionRepository::new(path);
        (temp_dir, repo)
    }

    fn txn(kind: EntryKind, cents: i64, y: i32, m: u32, d: u32) -> Transaction {
        Transaction::new(
            kind,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_keeps_date_descending() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.insert(txn(EntryKind::Expense, 100, 2024, 6, 1)).unwrap();
        repo.insert(txn(EntryKind::Expense, 200, 2024, 6, 15)).unwrap();
        repo.insert(txn(EntryKind::Expense, 300, 2024, 5, 20)).unwrap();

        let all = repo.get_all().unwrap();
        let dates: Vec<_> = all.iter().map(|t| t.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            ]
        );
    }

    #[test]
    fn test_equal_dates_keep_insertion_order() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let first = txn(EntryKind::Expense, 100, 2024, 6, 15);
        let second = txn(EntryKind::Expense, 200, 2024, 6, 15);
        let first_id = first.id;
        let second_id = second.id;

        repo.insert(first).unwrap();
        repo.insert(second).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].id, first_id);
        assert_eq!(all[1].id, second_id);
    }

    #[test]
    fn test_update_resorts() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let old = txn(EntryKind::Expense, 100, 2024, 6, 1);
        let old_id = old.id;
        repo.insert(old).unwrap();
        repo.insert(txn(EntryKind::Expense, 200, 2024, 6, 15)).unwrap();

        // Move the older transaction past the newer one
        let mut moved = repo.get(old_id).unwrap().unwrap();
        moved.date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        assert!(repo.update(moved).unwrap());

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].id, old_id);
    }

    #[test]
    fn test_update_missing_returns_false() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert!(!repo.update(txn(EntryKind::Income, 100, 2024, 6, 1)).unwrap());
    }

    #[test]
    fn test_delete_idempotent() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let t = txn(EntryKind::Expense, 100, 2024, 6, 1);
        let id = t.id;
        repo.insert(t).unwrap();

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_get_by_month() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.insert(txn(EntryKind::Expense, 100, 2024, 6, 1)).unwrap();
        repo.insert(txn(EntryKind::Expense, 200, 2024, 6, 15)).unwrap();
        repo.insert(txn(EntryKind::Expense, 300, 2024, 7, 1)).unwrap();

        let june = repo
            .get_by_month(MonthKey::new(2024, 6).unwrap())
            .unwrap();
        assert_eq!(june.len(), 2);
    }

    #[test]
    fn test_available_months_descending() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.insert(txn(EntryKind::Expense, 100, 2024, 6, 1)).unwrap();
        repo.insert(txn(EntryKind::Expense, 200, 2023, 12, 15)).unwrap();
        repo.insert(txn(EntryKind::Expense, 300, 2024, 7, 1)).unwrap();
        repo.insert(txn(EntryKind::Income, 400, 2024, 6, 20)).unwrap();

        let months = repo.available_months().unwrap();
        assert_eq!(
            months,
            vec![
                MonthKey::new(2024, 7).unwrap(),
                MonthKey::new(2024, 6).unwrap(),
                MonthKey::new(2023, 12).unwrap(),
            ]
        );
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let t = txn(EntryKind::Expense, 5000, 2024, 6, 15);
        let id = t.id;
        repo.insert(t).unwrap();
        repo.insert(txn(EntryKind::Income, 100_000, 2024, 6, 1)).unwrap();
        repo.save().unwrap();

        let repo2 = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 2);
        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount, Money::from_cents(5000));
        // Sort invariant holds after reload
        let all = repo2.get_all().unwrap();
        assert!(all[0].date >= all[1].date);
    }

    #[test]
    fn test_reset_removes_file() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.insert(txn(EntryKind::Expense, 100, 2024, 6, 1)).unwrap();
        repo.save().unwrap();

        repo.reset().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(!temp_dir.path().join("transactions.json").exists());
    }
}
