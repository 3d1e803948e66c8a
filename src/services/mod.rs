//! Business logic services
//!
//! Each service borrows the shared [`Storage`](crate::storage::Storage) and
//! layers validation, denormalization and change notification over the raw
//! repositories.

pub mod category;
pub mod settings;
pub mod transaction;

pub use category::{CategoryBoard, CategoryService, CategoryUpdate};
pub use settings::SettingsService;
pub use transaction::{NewTransaction, TransactionService, TransactionUpdate};
