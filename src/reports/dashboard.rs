//! Monthly dashboard aggregation
//!
//! Pure computation over a transaction snapshot: derives the monthly income,
//! per-pillar spending, envelopes and margins for a given calendar month.
//! Nothing here touches storage; callers pass the collections in and
//! recompute after a change signal.

use std::collections::BTreeSet;

use crate::error::{FlexiError, FlexiResult};
use crate::models::{BudgetAllocation, EntryKind, Money, MonthKey, Pillar, Transaction};

/// Aggregated view of one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyDashboard {
    pub month: MonthKey,
    pub allocation: BudgetAllocation,
    /// Sum of income transactions in the month
    pub total_income: Money,
    /// Sum of all expense transactions, including pillar-less ones
    pub total_expenses: Money,
    /// Per-pillar expense totals; pillar-less expenses appear in neither
    pub spent_needs: Money,
    pub spent_wants: Money,
    pub spent_savings: Money,
    /// Number of transactions in the month, either kind
    pub transaction_count: usize,
}

/// Budget position of one pillar within a dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillarStatus {
    pub pillar: Pillar,
    /// Income share allotted to this pillar for the month
    pub envelope: Money,
    pub spent: Money,
    /// Envelope minus spent; negative when over budget
    pub margin: Money,
    pub over_budget: bool,
}

impl MonthlyDashboard {
    /// Compute the dashboard for one month
    ///
    /// Fails fast on an invalid allocation rather than producing envelopes
    /// from percentages that do not sum to 100.
    pub fn generate(
        transactions: &[Transaction],
        allocation: &BudgetAllocation,
        month: MonthKey,
    ) -> FlexiResult<Self> {
        allocation
            .validate()
            .map_err(|e| FlexiError::Validation(e.to_string()))?;

        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();
        let mut spent_needs = Money::zero();
        let mut spent_wants = Money::zero();
        let mut spent_savings = Money::zero();
        let mut transaction_count = 0usize;

        for txn in transactions.iter().filter(|t| month.contains(t.date)) {
            transaction_count += 1;
            match txn.kind {
                EntryKind::Income => total_income = total_income + txn.amount,
                EntryKind::Expense => {
                    total_expenses = total_expenses + txn.amount;
                    match txn.pillar {
                        Some(Pillar::Needs) => spent_needs = spent_needs + txn.amount,
                        Some(Pillar::Wants) => spent_wants = spent_wants + txn.amount,
                        Some(Pillar::Savings) => spent_savings = spent_savings + txn.amount,
                        None => {}
                    }
                }
            }
        }

        Ok(Self {
            month,
            allocation: *allocation,
            total_income,
            total_expenses,
            spent_needs,
            spent_wants,
            spent_savings,
            transaction_count,
        })
    }

    /// Expense total attributed to a pillar
    pub fn spent_for(&self, pillar: Pillar) -> Money {
        match pillar {
            Pillar::Needs => self.spent_needs,
            Pillar::Wants => self.spent_wants,
            Pillar::Savings => self.spent_savings,
        }
    }

    /// Budget position of one pillar
    pub fn pillar_status(&self, pillar: Pillar) -> PillarStatus {
        let envelope = self.allocation.envelope_for(pillar, self.total_income);
        let spent = self.spent_for(pillar);
        let margin = envelope - spent;
        PillarStatus {
            pillar,
            envelope,
            spent,
            margin,
            over_budget: margin.is_negative(),
        }
    }

    /// Net balance of the month: income minus all expenses
    pub fn balance(&self) -> Money {
        self.total_income - self.total_expenses
    }
}

/// Months that have at least one transaction, newest first
pub fn available_months(transactions: &[Transaction]) -> Vec<MonthKey> {
    let months: BTreeSet<MonthKey> = transactions
        .iter()
        .map(|t| MonthKey::from_date(t.date))
        .collect();
    months.into_iter().rev().collect()
}
