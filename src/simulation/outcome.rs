//! Simulation output structures

use crate::money::Money;
use crate::simulation::engine::PayoffOrdering;
use serde::{Deserialize, Serialize};

/// One month of simulation activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRow {
    /// Simulation month (1-indexed)
    pub month: u32,

    /// Interest accrued across all open accounts this month
    pub interest_accrued: Money,

    /// Total payments applied this month (minimums plus extra cascade)
    pub payments_applied: Money,

    /// Combined outstanding balance at end of month
    pub eop_balance: Money,

    /// Accounts still carrying a balance at end of month
    pub open_accounts: usize,
}

/// Result of simulating one payoff ordering to completion or horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffOutcome {
    /// The ordering policy that was simulated
    pub ordering: PayoffOrdering,

    /// Months until every balance reached zero; `None` when the horizon was
    /// exceeded, signalling the budget cannot retire the debt
    pub months: Option<u32>,

    /// Total interest accrued over the run
    pub total_interest: Money,

    /// Total payments applied over the run
    pub total_paid: Money,

    /// Monthly ledger; populated only when the config asks for it
    pub ledger: Vec<MonthRow>,
}

impl PayoffOutcome {
    /// Whether every balance reached zero within the horizon
    pub fn converged(&self) -> bool {
        self.months.is_some()
    }
}
