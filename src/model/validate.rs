//! Structural validation of input snapshots
//!
//! Numeric edge cases (zero income, zero debts, already-met goals) are valid
//! inputs and are handled by clamping inside the components. Validation only
//! rejects structurally invalid records, identifying the offending entity
//! and field so the caller can surface it.

use crate::model::data::{Asset, Debt, DebtType, FinancialGoal, Transaction};
use thiserror::Error;

/// A structurally invalid input record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{entity} {id}: {field} must not be negative")]
    NegativeAmount {
        entity: &'static str,
        id: String,
        field: &'static str,
    },

    #[error("{entity} {id}: {field} must be positive")]
    NonPositiveAmount {
        entity: &'static str,
        id: String,
        field: &'static str,
    },

    #[error("debt {id}: current_balance exceeds initial_balance")]
    BalanceExceedsInitial { id: String },

    #[error("debt {id}: term_months is only valid on installment debts")]
    TermOnNonInstallment { id: String },
}

/// Validate a single debt record
pub fn validate_debt(debt: &Debt) -> Result<(), ValidationError> {
    if debt.initial_balance.is_negative() {
        return Err(ValidationError::NegativeAmount {
            entity: "debt",
            id: debt.id.clone(),
            field: "initial_balance",
        });
    }
    if debt.current_balance.is_negative() {
        return Err(ValidationError::NegativeAmount {
            entity: "debt",
            id: debt.id.clone(),
            field: "current_balance",
        });
    }
    if debt.current_balance > debt.initial_balance {
        return Err(ValidationError::BalanceExceedsInitial {
            id: debt.id.clone(),
        });
    }
    if debt.interest_rate < 0.0 {
        return Err(ValidationError::NegativeAmount {
            entity: "debt",
            id: debt.id.clone(),
            field: "interest_rate",
        });
    }
    if debt.minimum_payment.is_negative() {
        return Err(ValidationError::NegativeAmount {
            entity: "debt",
            id: debt.id.clone(),
            field: "minimum_payment",
        });
    }
    if debt.term_months.is_some() && debt.debt_type != DebtType::Installment {
        return Err(ValidationError::TermOnNonInstallment {
            id: debt.id.clone(),
        });
    }
    Ok(())
}

/// Validate a single goal record
pub fn validate_goal(goal: &FinancialGoal) -> Result<(), ValidationError> {
    if !goal.target_amount.is_positive() {
        return Err(ValidationError::NonPositiveAmount {
            entity: "goal",
            id: goal.id.clone(),
            field: "target_amount",
        });
    }
    if goal.current_amount.is_negative() {
        return Err(ValidationError::NegativeAmount {
            entity: "goal",
            id: goal.id.clone(),
            field: "current_amount",
        });
    }
    Ok(())
}

/// Validate a single transaction record
pub fn validate_transaction(tx: &Transaction) -> Result<(), ValidationError> {
    if !tx.amount.is_positive() {
        return Err(ValidationError::NonPositiveAmount {
            entity: "transaction",
            id: tx.id.clone(),
            field: "amount",
        });
    }
    Ok(())
}

/// Validate a single asset record
pub fn validate_asset(asset: &Asset) -> Result<(), ValidationError> {
    if asset.value.is_negative() {
        return Err(ValidationError::NegativeAmount {
            entity: "asset",
            id: asset.id.clone(),
            field: "value",
        });
    }
    Ok(())
}

/// Validate a list of debts, failing on the first invalid record
pub fn validate_debts(debts: &[Debt]) -> Result<(), ValidationError> {
    debts.iter().try_for_each(validate_debt)
}

/// Validate a list of goals, failing on the first invalid record
pub fn validate_goals(goals: &[FinancialGoal]) -> Result<(), ValidationError> {
    goals.iter().try_for_each(validate_goal)
}

/// Validate a list of transactions, failing on the first invalid record
pub fn validate_transactions(transactions: &[Transaction]) -> Result<(), ValidationError> {
    transactions.iter().try_for_each(validate_transaction)
}

/// Validate a list of assets, failing on the first invalid record
pub fn validate_assets(assets: &[Asset]) -> Result<(), ValidationError> {
    assets.iter().try_for_each(validate_asset)
}

/// Validate a complete snapshot before handing it to the engine
pub fn validate_snapshot(
    transactions: &[Transaction],
    debts: &[Debt],
    goals: &[FinancialGoal],
    assets: &[Asset],
) -> Result<(), ValidationError> {
    validate_transactions(transactions)?;
    validate_debts(debts)?;
    validate_goals(goals)?;
    validate_assets(assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use chrono::NaiveDate;

    fn valid_debt() -> Debt {
        Debt {
            id: "d1".into(),
            name: "Card".into(),
            creditor: "Bank".into(),
            debt_type: DebtType::Revolving,
            initial_balance: Money::from_minor(100_000),
            current_balance: Money::from_minor(80_000),
            interest_rate: 19.9,
            minimum_payment: Money::from_minor(2_500),
            term_months: None,
        }
    }

    #[test]
    fn test_valid_debt_passes() {
        assert!(validate_debt(&valid_debt()).is_ok());
    }

    #[test]
    fn test_negative_balance_rejected() {
        let mut debt = valid_debt();
        debt.current_balance = Money::from_minor(-1);
        let err = validate_debt(&debt).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NegativeAmount {
                entity: "debt",
                id: "d1".into(),
                field: "current_balance",
            }
        );
    }

    #[test]
    fn test_balance_above_initial_rejected() {
        let mut debt = valid_debt();
        debt.current_balance = Money::from_minor(200_000);
        assert_eq!(
            validate_debt(&debt).unwrap_err(),
            ValidationError::BalanceExceedsInitial { id: "d1".into() }
        );
    }

    #[test]
    fn test_term_months_on_revolving_rejected() {
        let mut debt = valid_debt();
        debt.term_months = Some(60);
        assert_eq!(
            validate_debt(&debt).unwrap_err(),
            ValidationError::TermOnNonInstallment { id: "d1".into() }
        );

        debt.debt_type = DebtType::Installment;
        assert!(validate_debt(&debt).is_ok());
    }

    #[test]
    fn test_snapshot_validation_flags_any_list() {
        let tx = Transaction {
            id: "t1".into(),
            kind: crate::model::TransactionKind::Expense,
            category: "General".into(),
            amount: Money::from_minor(-500_000),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            related_item_id: None,
        };
        let asset = Asset {
            id: "a1".into(),
            name: "Savings".into(),
            category: "Cash".into(),
            value: Money::from_minor(-1),
        };

        assert_eq!(
            validate_snapshot(&[tx], &[], &[], &[]).unwrap_err(),
            ValidationError::NonPositiveAmount {
                entity: "transaction",
                id: "t1".into(),
                field: "amount",
            }
        );
        assert_eq!(
            validate_snapshot(&[], &[], &[], &[asset]).unwrap_err(),
            ValidationError::NegativeAmount {
                entity: "asset",
                id: "a1".into(),
                field: "value",
            }
        );
        assert!(validate_snapshot(&[], &[valid_debt()], &[], &[]).is_ok());
    }

    #[test]
    fn test_non_positive_goal_target_rejected() {
        let goal = FinancialGoal {
            id: "g1".into(),
            name: "Trip".into(),
            target_amount: Money::ZERO,
            current_amount: Money::ZERO,
            deadline: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
            priority: crate::model::GoalPriority::Medium,
        };
        assert_eq!(
            validate_goal(&goal).unwrap_err(),
            ValidationError::NonPositiveAmount {
                entity: "goal",
                id: "g1".into(),
                field: "target_amount",
            }
        );
    }
}
