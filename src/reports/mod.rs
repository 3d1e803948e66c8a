//! Derived views over the persisted data
//!
//! Reports are pure functions of the collections passed in; they never read
//! or write storage themselves.

pub mod dashboard;

pub use dashboard::{available_months, MonthlyDashboard, PillarStatus};
