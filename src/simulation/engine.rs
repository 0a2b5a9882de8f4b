//! Core amortization simulator
//!
//! Advances a set of amortizing debts month by month under a fixed payment
//! budget and an injected ordering policy until every balance is retired or
//! the payoff horizon is exceeded. One engine serves both orderings; the
//! policy only decides where leftover budget cascades.

use crate::model::{validate_debts, Debt, ValidationError};
use crate::money::Money;
use crate::simulation::outcome::{MonthRow, PayoffOutcome};
use crate::simulation::state::DebtAccount;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Maximum number of simulated months before a run is declared
/// non-convergent
pub const PAYOFF_HORIZON_MONTHS: u32 = 1200;

/// Policy for directing leftover budget among open accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffOrdering {
    /// Smallest current balance first
    Snowball,
    /// Highest interest rate first
    Avalanche,
}

impl PayoffOrdering {
    /// Compare two accounts under this policy; ties fall back to input
    /// order so runs are deterministic
    pub fn compare(&self, a: &DebtAccount, b: &DebtAccount) -> Ordering {
        let primary = match self {
            PayoffOrdering::Snowball => a.balance.cmp(&b.balance),
            PayoffOrdering::Avalanche => b
                .interest_rate
                .partial_cmp(&a.interest_rate)
                .unwrap_or(Ordering::Equal),
        };
        primary.then(a.input_index.cmp(&b.input_index))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PayoffOrdering::Snowball => "snowball",
            PayoffOrdering::Avalanche => "avalanche",
        }
    }
}

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Budget beyond the sum of minimum payments
    pub extra_payment: Money,

    /// Months before the run is declared non-convergent
    pub horizon_months: u32,

    /// Whether to record the month-by-month ledger
    pub detailed_ledger: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            extra_payment: Money::ZERO,
            horizon_months: PAYOFF_HORIZON_MONTHS,
            detailed_ledger: false,
        }
    }
}

/// Amortization simulator parameterized by an ordering policy
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Simulate payoff of the amortizing debts in `debts` under `ordering`
    ///
    /// The caller's debts are read-only; the run works on its own accounts.
    /// Structurally invalid debts are rejected before any work.
    pub fn run(
        &self,
        debts: &[Debt],
        ordering: PayoffOrdering,
    ) -> Result<PayoffOutcome, ValidationError> {
        validate_debts(debts)?;

        let mut accounts = DebtAccount::from_debts(debts);
        let mut outcome = PayoffOutcome {
            ordering,
            months: Some(0),
            total_interest: Money::ZERO,
            total_paid: Money::ZERO,
            ledger: Vec::new(),
        };

        if accounts.is_empty() {
            return Ok(outcome);
        }

        // Budget is fixed for the whole run: retired debts free their
        // minimums into the leftover pool rather than shrinking the budget.
        let budget: Money =
            accounts.iter().map(|a| a.minimum_payment).sum::<Money>() + self.config.extra_payment;

        for month in 1..=self.config.horizon_months {
            // 1. Accrue interest on every open account
            let mut interest_accrued = Money::ZERO;
            for account in accounts.iter_mut().filter(|a| a.is_open()) {
                let interest = account.balance.monthly_interest(account.interest_rate);
                account.balance += interest;
                interest_accrued += interest;
            }
            outcome.total_interest += interest_accrued;

            // 2. Apply minimum payments, capped at the remaining balance
            let mut payments_applied = Money::ZERO;
            for account in accounts.iter_mut().filter(|a| a.is_open()) {
                let payment = account.minimum_payment.min(account.balance);
                account.balance -= payment;
                payments_applied += payment;
            }

            // 3. Leftover pool: unapplied budget, including minimums freed
            // by accounts retired in earlier months or capped this month
            let mut leftover = budget - payments_applied;

            // 4. Order the open accounts under the policy
            let mut order: Vec<usize> = (0..accounts.len())
                .filter(|&i| accounts[i].is_open())
                .collect();
            order.sort_by(|&i, &j| ordering.compare(&accounts[i], &accounts[j]));

            // 5. Cascade the leftover down the ordering; an account retired
            // here frees the rest of the pool for the next in line
            for &i in &order {
                if !leftover.is_positive() {
                    break;
                }
                let payment = leftover.min(accounts[i].balance);
                accounts[i].balance -= payment;
                payments_applied += payment;
                leftover -= payment;
            }

            outcome.total_paid += payments_applied;

            let eop_balance: Money = accounts.iter().map(|a| a.balance).sum();
            let open_accounts = accounts.iter().filter(|a| a.is_open()).count();

            if self.config.detailed_ledger {
                outcome.ledger.push(MonthRow {
                    month,
                    interest_accrued,
                    payments_applied,
                    eop_balance,
                    open_accounts,
                });
            }

            // 6. Retired accounts are excluded from subsequent months by
            // the is_open filters above
            if open_accounts == 0 {
                outcome.months = Some(month);
                return Ok(outcome);
            }
        }

        log::warn!(
            "{} payoff did not converge within {} months; budget {} cannot outpace accrual",
            ordering.as_str(),
            self.config.horizon_months,
            budget,
        );
        outcome.months = None;
        Ok(outcome)
    }
}

/// Simulate payoff with a one-off configuration
pub fn simulate_payoff(
    debts: &[Debt],
    ordering: PayoffOrdering,
    config: &SimulationConfig,
) -> Result<PayoffOutcome, ValidationError> {
    Simulator::new(config.clone()).run(debts, ordering)
}
