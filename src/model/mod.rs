//! Input data model: debts, goals, transactions, and assets

mod data;
mod validate;

pub use data::{
    Asset, Debt, DebtType, FinancialGoal, GoalPriority, Transaction, TransactionKind,
};
pub use validate::{
    validate_asset, validate_assets, validate_debt, validate_debts, validate_goal,
    validate_goals, validate_snapshot, validate_transaction, validate_transactions,
    ValidationError,
};
