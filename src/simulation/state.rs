//! Working state for an amortization run
//!
//! The simulator never mutates caller-owned debts; it builds these working
//! accounts at the start of each run and retires them as balances reach zero.

use crate::model::Debt;
use crate::money::Money;

/// Mutable working copy of one amortizing debt during simulation
#[derive(Debug, Clone)]
pub struct DebtAccount {
    /// Identifier of the source debt
    pub debt_id: String,

    /// Position in the caller's input list; deterministic tie-break for
    /// ordering policies
    pub input_index: usize,

    /// Outstanding balance, including accrued interest
    pub balance: Money,

    /// Annual percentage rate
    pub interest_rate: f64,

    /// Required monthly payment
    pub minimum_payment: Money,
}

impl DebtAccount {
    /// Build working accounts from a snapshot
    ///
    /// Fixed-expense debts and already-retired balances are excluded; the
    /// remaining accounts keep their input order.
    pub fn from_debts(debts: &[Debt]) -> Vec<DebtAccount> {
        debts
            .iter()
            .enumerate()
            .filter(|(_, d)| d.debt_type.amortizes() && d.current_balance.is_positive())
            .map(|(input_index, d)| DebtAccount {
                debt_id: d.id.clone(),
                input_index,
                balance: d.current_balance,
                interest_rate: d.interest_rate,
                minimum_payment: d.minimum_payment,
            })
            .collect()
    }

    /// Whether this account still carries a balance
    pub fn is_open(&self) -> bool {
        self.balance.is_positive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DebtType;

    fn debt(id: &str, debt_type: DebtType, balance_major: f64) -> Debt {
        Debt {
            id: id.into(),
            name: id.into(),
            creditor: "Bank".into(),
            debt_type,
            initial_balance: Money::from_major(balance_major.max(1.0)),
            current_balance: Money::from_major(balance_major),
            interest_rate: 12.0,
            minimum_payment: Money::from_major(25.0),
            term_months: None,
        }
    }

    #[test]
    fn test_from_debts_filters_and_keeps_order() {
        let debts = vec![
            debt("d1", DebtType::Revolving, 500.0),
            debt("d2", DebtType::FixedExpense, 0.0),
            debt("d3", DebtType::Installment, 2000.0),
            debt("d4", DebtType::Revolving, 0.0),
        ];

        let accounts = DebtAccount::from_debts(&debts);
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].debt_id, "d1");
        assert_eq!(accounts[0].input_index, 0);
        assert_eq!(accounts[1].debt_id, "d3");
        assert_eq!(accounts[1].input_index, 2);
    }
}
