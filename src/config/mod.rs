//! Configuration module for FlexiBudget
//!
//! Provides XDG-compliant path resolution for the local data directory.
//! User-facing preferences (budget allocation, display currency) are domain
//! state and live in the settings store, not here.

pub mod paths;

pub use paths::FlexiPaths;
