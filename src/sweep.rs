//! Batch strategy comparison across candidate extra-payment budgets
//!
//! Backs "what if I paid more" exploration: every sweep point is an
//! independent pure comparison over the same snapshot, so points run in
//! parallel.

use crate::model::{Debt, ValidationError};
use crate::money::Money;
use crate::strategy::{compare_strategies, DebtStrategyAnalysis};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Strategy comparison at one candidate extra-payment budget
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepPoint {
    /// Extra budget beyond the minimum payments
    pub extra_payment: Money,

    /// Full comparison at this budget
    pub analysis: DebtStrategyAnalysis,
}

/// Run the strategy comparator for each extra-payment candidate
///
/// Results come back in the order of `extras`.
pub fn sweep_extra_payments(
    debts: &[Debt],
    extras: &[Money],
) -> Result<Vec<SweepPoint>, ValidationError> {
    extras
        .par_iter()
        .map(|&extra_payment| {
            compare_strategies(debts, extra_payment).map(|analysis| SweepPoint {
                extra_payment,
                analysis,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DebtType;

    fn debt(id: &str, balance: f64, rate: f64, minimum: f64) -> Debt {
        Debt {
            id: id.into(),
            name: id.into(),
            creditor: "Bank".into(),
            debt_type: DebtType::Revolving,
            initial_balance: Money::from_major(balance),
            current_balance: Money::from_major(balance),
            interest_rate: rate,
            minimum_payment: Money::from_major(minimum),
            term_months: None,
        }
    }

    #[test]
    fn test_sweep_preserves_input_order() {
        let debts = vec![debt("d1", 800.0, 18.0, 25.0)];
        let extras: Vec<Money> = [0.0, 50.0, 200.0].map(Money::from_major).to_vec();

        let points = sweep_extra_payments(&debts, &extras).unwrap();
        assert_eq!(points.len(), 3);
        for (point, &extra) in points.iter().zip(&extras) {
            assert_eq!(point.extra_payment, extra);
        }
    }

    #[test]
    fn test_bigger_budgets_never_pay_longer() {
        let debts = vec![debt("d1", 800.0, 18.0, 25.0), debt("d2", 3000.0, 9.0, 60.0)];
        let extras: Vec<Money> = [0.0, 25.0, 100.0, 400.0].map(Money::from_major).to_vec();

        let points = sweep_extra_payments(&debts, &extras).unwrap();
        let months: Vec<u32> = points
            .iter()
            .map(|p| p.analysis.snowball.payoff_time_months.unwrap())
            .collect();
        assert!(months.windows(2).all(|w| w[1] <= w[0]));
    }
}
