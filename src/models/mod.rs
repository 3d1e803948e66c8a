//! Core data models for FlexiBudget
//!
//! This module contains all the data structures that represent the budgeting
//! domain: categories, transactions, pillars, the budget allocation and the
//! settings record.

pub mod allocation;
pub mod category;
pub mod ids;
pub mod money;
pub mod month;
pub mod pillar;
pub mod settings;
pub mod transaction;

pub use allocation::{AllocationError, BudgetAllocation};
pub use category::{Category, CategoryValidationError, EntryKind};
pub use ids::{CategoryId, TransactionId};
pub use money::Money;
pub use month::MonthKey;
pub use pillar::Pillar;
pub use settings::{Settings, SUPPORTED_CURRENCIES};
pub use transaction::{Transaction, TransactionValidationError};
