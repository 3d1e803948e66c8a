//! Transaction service
//!
//! Provides business logic for transaction management: CRUD with amount
//! validation and pillar denormalization. The pillar stored on a transaction
//! is resolved from the category store synchronously at write time and never
//! trusted from caller input.
//!
//! Staleness caveat: this service reads the category store's current
//! snapshot during `add`/`update` and does not subscribe to category
//! changes. A category edited or deleted afterwards does not retroactively
//! rewrite the pillar already recorded on a transaction - the pillar is a
//! snapshot at transaction time.

use chrono::NaiveDate;

use crate::error::{FlexiError, FlexiResult};
use crate::events::StoreChange;
use crate::models::{CategoryId, EntryKind, Money, Pillar, Transaction, TransactionId};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: EntryKind,
    pub amount: Money,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub category_id: Option<CategoryId>,
}

/// Partial update for a transaction; `None` fields are left unchanged
///
/// `description` and `category_id` use nested options so a caller can
/// distinguish "leave as is" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct TransactionUpdate {
    pub kind: Option<EntryKind>,
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    pub description: Option<Option<String>>,
    pub category_id: Option<Option<CategoryId>>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new transaction
    pub fn add(&self, input: NewTransaction) -> FlexiResult<Transaction> {
        if !input.amount.is_positive() {
            return Err(FlexiError::Validation(format!(
                "Amount must be positive, got {}",
                input.amount
            )));
        }

        // The referenced category must be valid at assignment time
        if let Some(cat_id) = input.category_id {
            self.storage
                .categories
                .get(cat_id)?
                .ok_or_else(|| FlexiError::category_not_found(cat_id.to_string()))?;
        }

        let mut txn = Transaction::new(input.kind, input.amount, input.date);
        txn.description = input.description;
        txn.category_id = input.category_id;
        txn.pillar = self.resolve_pillar(input.kind, input.category_id)?;

        txn.validate()
            .map_err(|e| FlexiError::Validation(e.to_string()))?;

        self.storage.transactions.insert(txn.clone())?;
        self.storage.transactions.save()?;
        self.storage.notifier.emit(StoreChange::Transactions);

        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> FlexiResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// List all transactions, date descending
    pub fn list(&self) -> FlexiResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// Update a transaction
    ///
    /// The pillar-resolution rule is reapplied with the possibly new kind and
    /// category; switching to income forces the pillar absent even if the
    /// caller attached a pillar-bearing category.
    pub fn update(&self, id: TransactionId, update: TransactionUpdate) -> FlexiResult<Transaction> {
        let mut txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FlexiError::transaction_not_found(id.to_string()))?;

        if let Some(kind) = update.kind {
            txn.kind = kind;
        }
        if let Some(amount) = update.amount {
            if !amount.is_positive() {
                return Err(FlexiError::Validation(format!(
                    "Amount must be positive, got {}",
                    amount
                )));
            }
            txn.amount = amount;
        }
        if let Some(date) = update.date {
            txn.date = date;
        }
        if let Some(description) = update.description {
            txn.description = description;
        }
        if let Some(category_id) = update.category_id {
            // A newly assigned category must be valid at assignment time
            if let Some(cat_id) = category_id {
                self.storage
                    .categories
                    .get(cat_id)?
                    .ok_or_else(|| FlexiError::category_not_found(cat_id.to_string()))?;
            }
            txn.category_id = category_id;
        }

        txn.pillar = self.resolve_pillar(txn.kind, txn.category_id)?;

        txn.validate()
            .map_err(|e| FlexiError::Validation(e.to_string()))?;

        self.storage.transactions.update(txn.clone())?;
        self.storage.transactions.save()?;
        self.storage.notifier.emit(StoreChange::Transactions);

        Ok(txn)
    }

    /// Delete a transaction
    ///
    /// Idempotent: deleting a nonexistent id is a no-op.
    pub fn delete(&self, id: TransactionId) -> FlexiResult<()> {
        let removed = self.storage.transactions.delete(id)?;
        if removed {
            self.storage.transactions.save()?;
            self.storage.notifier.emit(StoreChange::Transactions);
        }
        Ok(())
    }

    /// Resolve the denormalized pillar from a synchronous category snapshot
    ///
    /// Present iff the transaction is an expense and the referenced category
    /// carries a pillar; absent in every other case (income, no category,
    /// dangling reference).
    fn resolve_pillar(
        &self,
        kind: EntryKind,
        category_id: Option<CategoryId>,
    ) -> FlexiResult<Option<Pillar>> {
        if kind != EntryKind::Expense {
            return Ok(None);
        }

        match category_id {
            Some(cat_id) => Ok(self.storage.categories.get(cat_id)?.and_then(|c| c.pillar)),
            None => Ok(None),
        }
    }
}
