//! Budget allocation model
//!
//! The target percentage of monthly income assigned to each pillar. The
//! three values must sum to exactly 100; the rule is enforced at the edit
//! boundary and never silently normalized.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::pillar::Pillar;

/// Target percentages per pillar
///
/// Percentages are unsigned, so negative values are unrepresentable; only
/// the sum rule needs runtime checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub needs: u8,
    pub wants: u8,
    pub savings: u8,
}

impl BudgetAllocation {
    /// Create an allocation, validating the sum rule
    pub fn new(needs: u8, wants: u8, savings: u8) -> Result<Self, AllocationError> {
        let allocation = Self {
            needs,
            wants,
            savings,
        };
        allocation.validate()?;
        Ok(allocation)
    }

    /// Check the sum rule: the three percentages add up to exactly 100
    pub fn validate(&self) -> Result<(), AllocationError> {
        let sum = self.needs as u32 + self.wants as u32 + self.savings as u32;
        if sum != 100 {
            return Err(AllocationError::BadSum(sum));
        }
        Ok(())
    }

    /// The percentage assigned to a pillar
    pub fn pct_for(&self, pillar: Pillar) -> u8 {
        match pillar {
            Pillar::Needs => self.needs,
            Pillar::Wants => self.wants,
            Pillar::Savings => self.savings,
        }
    }

    /// The monetary envelope a pillar gets out of the given income
    pub fn envelope_for(&self, pillar: Pillar, income: Money) -> Money {
        income.percent(self.pct_for(pillar))
    }
}

impl Default for BudgetAllocation {
    /// The classic 50/30/20 rule
    fn default() -> Self {
        Self {
            needs: 50,
            wants: 30,
            savings: 20,
        }
    }
}

impl fmt::Display for BudgetAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.needs, self.wants, self.savings)
    }
}

/// Validation error for allocations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// The three percentages do not sum to 100
    BadSum(u32),
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadSum(sum) => write!(f, "Allocation percentages must sum to 100, got {}", sum),
        }
    }
}

impl std::error::Error for AllocationError {}
