//! Month-by-month debt amortization simulation

mod engine;
mod outcome;
mod state;

pub use engine::{
    simulate_payoff, PayoffOrdering, SimulationConfig, Simulator, PAYOFF_HORIZON_MONTHS,
};
pub use outcome::{MonthRow, PayoffOutcome};
pub use state::DebtAccount;
