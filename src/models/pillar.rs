//! Spending pillar enumeration
//!
//! Every expense category belongs to one of three budget pillars. The
//! persisted wire names are the original French labels so existing data
//! files stay readable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three budget buckets an expense can fall into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pillar {
    /// Essential spending (rent, groceries, utilities)
    #[serde(rename = "Besoins")]
    Needs,
    /// Discretionary spending (dining out, entertainment)
    #[serde(rename = "Envies")]
    Wants,
    /// Savings and investments
    #[serde(rename = "Épargne")]
    Savings,
}

impl Pillar {
    /// All pillars, in display order
    pub const fn all() -> [Pillar; 3] {
        [Pillar::Needs, Pillar::Wants, Pillar::Savings]
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Needs => write!(f, "Needs"),
            Self::Wants => write!(f, "Wants"),
            Self::Savings => write!(f, "Savings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Pillar::Needs).unwrap(), "\"Besoins\"");
        assert_eq!(serde_json::to_string(&Pillar::Wants).unwrap(), "\"Envies\"");
        assert_eq!(
            serde_json::to_string(&Pillar::Savings).unwrap(),
            "\"Épargne\""
        );

        let p: Pillar = serde_json::from_str("\"Épargne\"").unwrap();
        assert_eq!(p, Pillar::Savings);
    }

    #[test]
    fn test_all_order() {
        assert_eq!(
            Pillar::all(),
            [Pillar::Needs, Pillar::Wants, Pillar::Savings]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Pillar::Needs.to_string(), "Needs");
    }
}
