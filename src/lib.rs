//! FlexiBudget core
//!
//! Domain and persistence layer for a personal budgeting application built
//! around the 50/30/20 method: income and expenses are tracked as dated
//! transactions, expense categories are pinned to one of three pillars
//! (needs, wants, savings), and a monthly dashboard compares per-pillar
//! spending against income-derived envelopes.
//!
//! Data lives in three JSON files (categories, transactions, settings)
//! behind a [`storage::Storage`] coordinator; the [`services`] layer adds
//! validation, pillar denormalization and change signals; [`reports`] holds
//! the pure aggregation over transaction snapshots.

pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FlexiError, FlexiResult};
pub use events::{ChangeNotifier, StoreChange};
pub use models::{
    BudgetAllocation, Category, CategoryId, EntryKind, Money, MonthKey, Pillar, Settings,
    Transaction, TransactionId,
};
pub use reports::MonthlyDashboard;
pub use services::{CategoryService, SettingsService, TransactionService};
pub use storage::Storage;
