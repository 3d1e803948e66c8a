//! User settings model
//!
//! A single persisted record holding the budget allocation and the display
//! currency. The currency is only used for formatting; validation is
//! membership in a small fixed set, nothing more.

use serde::{Deserialize, Serialize};

use super::allocation::BudgetAllocation;

/// Currency codes the UI offers
pub const SUPPORTED_CURRENCIES: [&str; 3] = ["EUR", "USD", "GBP"];

/// User settings for FlexiBudget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Target percentage split across the three pillars
    #[serde(default, rename = "budgetAllocation")]
    pub allocation: BudgetAllocation,

    /// Display currency code
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allocation: BudgetAllocation::default(),
            currency: default_currency(),
        }
    }
}

impl Settings {
    /// Check whether a currency code belongs to the supported set
    pub fn is_supported_currency(code: &str) -> bool {
        SUPPORTED_CURRENCIES.contains(&code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.currency, "EUR");
        assert_eq!(settings.allocation, BudgetAllocation::default());
    }

    #[test]
    fn test_supported_currencies() {
        assert!(Settings::is_supported_currency("EUR"));
        assert!(Settings::is_supported_currency("USD"));
        assert!(Settings::is_supported_currency("GBP"));
        assert!(!Settings::is_supported_currency("JPY"));
        assert!(!Settings::is_supported_currency("eur"));
    }

    #[test]
    fn test_deserialization_fills_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_wire_keys() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains("\"budgetAllocation\""));
        assert!(!json.contains("\"allocation\""));

        let settings: Settings = serde_json::from_str(
            r#"{"budgetAllocation":{"needs":60,"wants":20,"savings":20},"currency":"USD"}"#,
        )
        .unwrap();
        assert_eq!(settings.allocation.needs, 60);
        assert_eq!(settings.currency, "USD");
    }
}
