//! Payoff strategy comparison
//!
//! Runs the amortization simulator once per ordering over identical inputs
//! and turns the pair of outcomes into a recommendation. All narrative text
//! comes from fixed templates, so the same snapshot always produces the same
//! strings. Each branch's analysis cites only that branch's own totals.

use crate::model::{Debt, ValidationError};
use crate::money::Money;
use crate::simulation::{
    simulate_payoff, PayoffOrdering, PayoffOutcome, SimulationConfig,
};
use serde::{Deserialize, Serialize};

/// Outcome of one ordering, as presented to the host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyBranch {
    /// Template narrative citing this branch's own totals
    pub analysis: String,

    /// Total interest accrued under this ordering
    pub total_interest: Money,

    /// Months to full payoff; `None` when the horizon was exceeded
    pub payoff_time_months: Option<u32>,
}

/// Side-by-side comparison of the two payoff orderings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtStrategyAnalysis {
    /// The recommended ordering
    pub recommendation: PayoffOrdering,

    /// Template narrative for the recommendation
    pub reasoning: String,

    /// Smallest-balance-first outcome
    pub snowball: StrategyBranch,

    /// Highest-rate-first outcome
    pub avalanche: StrategyBranch,
}

/// Compare snowball and avalanche payoff over the same debts and budget
///
/// The budget is the sum of minimum payments plus `extra_payment`. A
/// non-convergent branch is reported as data, never as an error.
pub fn compare_strategies(
    debts: &[Debt],
    extra_payment: Money,
) -> Result<DebtStrategyAnalysis, ValidationError> {
    let config = SimulationConfig {
        extra_payment,
        ..Default::default()
    };

    let snowball_run = simulate_payoff(debts, PayoffOrdering::Snowball, &config)?;
    let avalanche_run = simulate_payoff(debts, PayoffOrdering::Avalanche, &config)?;

    let no_debt = debts
        .iter()
        .all(|d| !d.debt_type.amortizes() || !d.current_balance.is_positive());

    let (recommendation, reasoning) = if no_debt {
        (
            PayoffOrdering::Snowball,
            "There is no amortizing debt to repay, so no payoff strategy is needed.".to_string(),
        )
    } else {
        recommend(&snowball_run, &avalanche_run, config.horizon_months)
    };

    Ok(DebtStrategyAnalysis {
        recommendation,
        reasoning,
        snowball: branch(&snowball_run, config.horizon_months),
        avalanche: branch(&avalanche_run, config.horizon_months),
    })
}

fn branch(outcome: &PayoffOutcome, horizon: u32) -> StrategyBranch {
    let plan = match outcome.ordering {
        PayoffOrdering::Snowball => "Paying smallest balances first",
        PayoffOrdering::Avalanche => "Paying highest interest rates first",
    };
    let analysis = match outcome.months {
        Some(0) => format!("{} has nothing to do: no amortizing debt is open.", plan),
        Some(months) => format!(
            "{} retires every debt in {} months with {} total interest.",
            plan, months, outcome.total_interest,
        ),
        None => format!(
            "{} does not retire the debts within {} months at this budget.",
            plan, horizon,
        ),
    };
    StrategyBranch {
        analysis,
        total_interest: outcome.total_interest,
        payoff_time_months: outcome.months,
    }
}

fn recommend(
    snowball: &PayoffOutcome,
    avalanche: &PayoffOutcome,
    horizon: u32,
) -> (PayoffOrdering, String) {
    match (snowball.months, avalanche.months) {
        (None, None) => (
            PayoffOrdering::Snowball,
            format!(
                "Neither ordering retires the debt within {} months; the budget does not \
                 outpace accruing interest. Increase the monthly payment.",
                horizon,
            ),
        ),
        (Some(_), None) => (
            PayoffOrdering::Snowball,
            "Only the snowball ordering retires the debt within the horizon at this budget."
                .to_string(),
        ),
        (None, Some(_)) => (
            PayoffOrdering::Avalanche,
            "Only the avalanche ordering retires the debt within the horizon at this budget."
                .to_string(),
        ),
        (Some(sb_months), Some(av_months)) => {
            if avalanche.total_interest < snowball.total_interest {
                let saved = snowball.total_interest - avalanche.total_interest;
                (
                    PayoffOrdering::Avalanche,
                    format!(
                        "Avalanche saves {} in interest versus snowball{}.",
                        saved,
                        months_clause(av_months, sb_months),
                    ),
                )
            } else if snowball.total_interest < avalanche.total_interest {
                let saved = avalanche.total_interest - snowball.total_interest;
                (
                    PayoffOrdering::Snowball,
                    format!(
                        "Snowball saves {} in interest versus avalanche{}.",
                        saved,
                        months_clause(sb_months, av_months),
                    ),
                )
            } else {
                // Equal cost: snowball wins on psychological momentum, a
                // judgment call rather than a numeric one
                (
                    PayoffOrdering::Snowball,
                    "Both orderings cost the same in interest and time here; snowball is \
                     recommended for the momentum of early payoffs."
                        .to_string(),
                )
            }
        }
    }
}

fn months_clause(recommended: u32, other: u32) -> String {
    if recommended < other {
        format!(" and pays off {} months sooner", other - recommended)
    } else if recommended > other {
        format!(" despite taking {} months longer", recommended - other)
    } else {
        String::new()
    }
}
