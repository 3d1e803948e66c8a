//! Category model
//!
//! A category labels transactions as income or expense; expense categories
//! additionally carry the spending pillar that budget dashboards group by.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::pillar::Pillar;

/// Minimum length of a category name after trimming
pub const MIN_NAME_LEN: usize = 2;

/// Whether an entity represents money coming in or going out
///
/// Shared by categories and transactions. Wire names come from the original
/// data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    #[serde(rename = "revenu")]
    Income,
    #[serde(rename = "depense")]
    Expense,
}

impl EntryKind {
    /// Check if this is the expense kind
    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// An income or expense category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier, immutable after creation
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Income or expense
    pub kind: EntryKind,

    /// Budget pillar; present iff `kind` is `Expense`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pillar: Option<Pillar>,
}

impl Category {
    /// Create a new category with a fresh id
    ///
    /// The pillar/kind coupling is normalized here: an income category drops
    /// any pillar it was handed. An expense category without a pillar is left
    /// for `validate` to reject.
    pub fn new(name: impl Into<String>, kind: EntryKind, pillar: Option<Pillar>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            kind,
            pillar: match kind {
                EntryKind::Income => None,
                EntryKind::Expense => pillar,
            },
        }
    }

    /// Validate the category's invariants
    ///
    /// - the trimmed name has at least [`MIN_NAME_LEN`] characters
    /// - an income category never carries a pillar
    /// - an expense category always carries exactly one pillar
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().chars().count() < MIN_NAME_LEN {
            return Err(CategoryValidationError::NameTooShort);
        }

        match (self.kind, self.pillar) {
            (EntryKind::Income, Some(_)) => Err(CategoryValidationError::IncomeWithPillar),
            (EntryKind::Expense, None) => Err(CategoryValidationError::ExpenseWithoutPillar),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    NameTooShort,
    IncomeWithPillar,
    ExpenseWithoutPillar,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooShort => write!(
                f,
                "Category name must be at least {} characters",
                MIN_NAME_LEN
            ),
            Self::IncomeWithPillar => write!(f, "An income category cannot have a pillar"),
            Self::ExpenseWithoutPillar => write!(f, "An expense category requires a pillar"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
