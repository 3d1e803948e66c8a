//! Transaction model
//!
//! A financial transaction with an amount magnitude, a day-granularity date
//! and an optional category reference. The pillar field is a denormalized
//! copy of the referenced category's pillar, captured at write time by the
//! transaction service - it is never set directly by callers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::EntryKind;
use super::ids::{CategoryId, TransactionId};
use super::money::Money;
use super::pillar::Pillar;

/// A financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    pub kind: EntryKind,

    /// Amount magnitude; always positive, sign implied by `kind`
    pub amount: Money,

    /// Transaction date (day granularity)
    pub date: NaiveDate,

    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Referenced category; may dangle if the category is later deleted
    #[serde(default, rename = "categoryId", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,

    /// Pillar snapshot taken from the category at create/update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pillar: Option<Pillar>,
}

impl Transaction {
    /// Create a new transaction with a fresh id and no category
    pub fn new(kind: EntryKind, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            date,
            description: None,
            category_id: None,
            pillar: None,
        }
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    /// Validate the transaction's invariants
    ///
    /// - the amount is strictly positive
    /// - an income transaction never carries a pillar
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.kind == EntryKind::Income && self.pillar.is_some() {
            return Err(TransactionValidationError::IncomeWithPillar);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.kind {
            EntryKind::Income => '+',
            EntryKind::Expense => '-',
        };
        write!(f, "{} {}{}", self.date.format("%Y-%m-%d"), sign, self.amount)
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    IncomeWithPillar,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive, got {}", amount)
            }
            Self::IncomeWithPillar => {
                write!(f, "An income transaction cannot have a pillar")
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
