//! Financial Engine - deterministic simulation and scoring over snapshots of
//! debts, goals, assets, and transactions
//!
//! This library provides:
//! - Snapshot aggregation into headline summary figures
//! - Multi-debt amortization simulation in fixed-point minor units
//! - Snowball/avalanche strategy comparison with a deterministic recommendation
//! - Composite financial-health scoring with qualitative findings
//! - Parallel sweeps across candidate extra-payment budgets
//!
//! Every entry point is a pure function of read-only input snapshots; the
//! engine holds no state, performs no I/O, and never retains references
//! across calls.

pub mod health;
pub mod model;
pub mod money;
pub mod simulation;
pub mod strategy;
pub mod summary;
pub mod sweep;

// Re-export commonly used types
pub use health::{score_financial_health, FinancialHealthAnalysis, HealthLevel};
pub use model::{
    validate_snapshot, Asset, Debt, DebtType, FinancialGoal, GoalPriority, Transaction,
    TransactionKind, ValidationError,
};
pub use money::Money;
pub use simulation::{simulate_payoff, PayoffOrdering, PayoffOutcome, SimulationConfig};
pub use strategy::{compare_strategies, DebtStrategyAnalysis, StrategyBranch};
pub use summary::{summarize, FinancialSummary};
pub use sweep::{sweep_extra_payments, SweepPoint};
