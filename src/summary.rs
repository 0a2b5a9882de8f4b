//! Summary aggregation over a full snapshot
//!
//! Reduces the transaction, debt, and asset lists into the headline figures
//! the dashboard and the health scorer consume. Pure and O(n); empty lists
//! yield the all-zero summary, structurally invalid records are rejected.

use crate::model::{
    validate_assets, validate_debts, validate_transactions, Asset, Debt, Transaction,
    TransactionKind, ValidationError,
};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Headline figures derived from a snapshot; recomputed on every call,
/// never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    /// Sum of income transaction amounts
    pub income: Money,

    /// Sum of expense transaction amounts
    pub expenses: Money,

    /// Sum of current balances over amortizing (non-fixed-expense) debts
    pub total_debt: Money,

    /// Asset values minus total debt
    pub net_worth: Money,
}

impl FinancialSummary {
    /// The all-zero summary, produced by empty inputs
    pub const ZERO: FinancialSummary = FinancialSummary {
        income: Money::ZERO,
        expenses: Money::ZERO,
        total_debt: Money::ZERO,
        net_worth: Money::ZERO,
    };
}

/// Aggregate a snapshot into a [`FinancialSummary`]
///
/// Inputs are validated first, so a record with a non-positive transaction
/// amount or a negative asset value never reaches the totals.
pub fn summarize(
    transactions: &[Transaction],
    debts: &[Debt],
    assets: &[Asset],
) -> Result<FinancialSummary, ValidationError> {
    validate_transactions(transactions)?;
    validate_debts(debts)?;
    validate_assets(assets)?;

    let income = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .map(|t| t.amount)
        .sum();
    let expenses = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount)
        .sum();
    let total_debt: Money = debts
        .iter()
        .filter(|d| d.debt_type.amortizes())
        .map(|d| d.current_balance)
        .sum();
    let asset_total: Money = assets.iter().map(|a| a.value).sum();

    Ok(FinancialSummary {
        income,
        expenses,
        total_debt,
        net_worth: asset_total - total_debt,
    })
}
