//! Fixed rule table for qualitative health findings
//!
//! Each rule compares one score component against a fixed threshold and
//! appends fixed strings, evaluated in a fixed order (savings, debt, goals),
//! so identical inputs always produce the identical findings set.

use super::ScoreComponents;

/// Savings rate treated as strong
const STRONG_SAVINGS_RATE: f64 = 0.20;

/// Savings rate below which a raise is recommended
const LOW_SAVINGS_RATE: f64 = 0.10;

/// Debt ratio above which debt load is called out as a weakness
const HEAVY_DEBT_RATIO: f64 = 1.0;

/// Debt ratio above which paydown is recommended
const ELEVATED_DEBT_RATIO: f64 = 0.5;

/// Mean goal progress treated as on track
const GOALS_ON_TRACK: f64 = 0.5;

/// Mean goal progress below which goals are called out as stalled
const GOALS_STALLED: f64 = 0.25;

/// Deterministic findings derived from the score components
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Evaluate the rule table against computed components
pub fn evaluate(components: &ScoreComponents) -> Findings {
    let mut findings = Findings::default();

    // Savings rules
    if components.savings_rate >= STRONG_SAVINGS_RATE {
        findings
            .strengths
            .push("Savings rate is at or above 20% of income.".to_string());
    } else if components.savings_rate < 0.0 {
        findings
            .weaknesses
            .push("Spending exceeds income.".to_string());
        findings
            .recommendations
            .push("Reduce expenses below income to stop the monthly shortfall.".to_string());
    } else if components.savings_rate < LOW_SAVINGS_RATE {
        findings
            .recommendations
            .push("Raise the savings rate to at least 10% of income.".to_string());
    }

    // Debt rules
    if components.debt_ratio <= 0.0 {
        findings
            .strengths
            .push("No amortizing debt outstanding.".to_string());
    } else if components.debt_ratio > HEAVY_DEBT_RATIO {
        findings
            .weaknesses
            .push("Debt load exceeds one year of income.".to_string());
        findings
            .recommendations
            .push("Direct extra payments at debt until it falls below one year of income.".to_string());
    } else if components.debt_ratio > ELEVATED_DEBT_RATIO {
        findings
            .recommendations
            .push("Work total debt below half of annual income.".to_string());
    }

    // Goal rules
    match components.goal_progress {
        None => findings
            .recommendations
            .push("Set at least one measurable financial goal.".to_string()),
        Some(mean) if mean >= GOALS_ON_TRACK => findings
            .strengths
            .push("Goals are at or past the halfway mark on average.".to_string()),
        Some(mean) if mean < GOALS_STALLED => {
            findings
                .weaknesses
                .push("Little progress has been made toward stated goals.".to_string());
            findings
                .recommendations
                .push("Schedule a recurring contribution toward each goal.".to_string());
        }
        Some(_) => {}
    }

    findings
}
