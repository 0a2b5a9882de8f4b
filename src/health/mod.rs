//! Composite financial-health scoring
//!
//! Combines the snapshot summary, debt totals, and goal progress into a
//! 0-100 score, a level, and a deterministic findings set. The weighting is
//! a fixed design choice: savings rate contributes up to 40 points, debt
//! load up to 35, and goal progress up to 25.
//!
//! Degenerate inputs (zero income, zero debts, no goals, already-met goals)
//! are clamped or guarded, never errors.

mod rules;

use crate::model::{validate_debts, validate_goals, Debt, FinancialGoal, ValidationError};
use crate::summary::FinancialSummary;
use serde::{Deserialize, Serialize};

pub use rules::Findings;

/// Maximum points from the savings-rate component
const SAVINGS_BAND_MAX: f64 = 40.0;

/// Savings rate at which the savings band maxes out
const SAVINGS_RATE_CEILING: f64 = 0.20;

/// Maximum points from the debt-load component
const DEBT_BAND_MAX: f64 = 35.0;

/// Debt-to-annual-income ratio at which the debt band bottoms out
const DEBT_RATIO_FLOOR: f64 = 2.0;

/// Maximum points from the goal-progress component
const GOAL_BAND_MAX: f64 = 25.0;

/// Points contributed when no goals exist; absence of goals is neutral,
/// not a failure
const NEUTRAL_GOAL_POINTS: f64 = 12.0;

/// Qualitative level derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthLevel {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl HealthLevel {
    /// Level cutoffs: 85 / 65 / 40
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => HealthLevel::Excellent,
            65..=84 => HealthLevel::Good,
            40..=64 => HealthLevel::Fair,
            _ => HealthLevel::NeedsImprovement,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthLevel::Excellent => "Excellent",
            HealthLevel::Good => "Good",
            HealthLevel::Fair => "Fair",
            HealthLevel::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Complete health assessment returned to the host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialHealthAnalysis {
    /// Composite score, an integer in [0, 100]
    pub score: u8,

    /// Qualitative level for the score
    pub level: HealthLevel,

    /// Template narrative summarizing the component contributions
    pub analysis: String,

    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Intermediate component values, exposed for inspection and tests
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreComponents {
    /// (income - expenses) / income, clamped to [-1, 1]; -1 when income is
    /// zero but spending is not
    pub savings_rate: f64,

    /// Savings-band points in [0, 40]
    pub savings_points: f64,

    /// Total debt over annual income (guarded against zero income)
    pub debt_ratio: f64,

    /// Debt-band points in [0, 35]
    pub debt_points: f64,

    /// Mean clamped goal progress; `None` when no goals exist
    pub goal_progress: Option<f64>,

    /// Goal-band points in [0, 25]
    pub goal_points: f64,
}

impl ScoreComponents {
    /// Composite score: component sum rounded to an integer in [0, 100]
    pub fn score(&self) -> u8 {
        let total = self.savings_points + self.debt_points + self.goal_points;
        total.round().clamp(0.0, 100.0) as u8
    }
}

/// Compute the three score components from a summary and goal list
pub fn score_components(summary: &FinancialSummary, goals: &[FinancialGoal]) -> ScoreComponents {
    let income = summary.income.to_major();
    let expenses = summary.expenses.to_major();

    // Zero income cannot divide; all spending with no income is the worst
    // case, no activity at all is flat
    let savings_rate = if income <= 0.0 {
        if expenses > 0.0 {
            -1.0
        } else {
            0.0
        }
    } else {
        ((income - expenses) / income).clamp(-1.0, 1.0)
    };
    let savings_points = if savings_rate <= 0.0 {
        0.0
    } else if savings_rate >= SAVINGS_RATE_CEILING {
        SAVINGS_BAND_MAX
    } else {
        savings_rate / SAVINGS_RATE_CEILING * SAVINGS_BAND_MAX
    };

    let debt_ratio = summary.total_debt.to_major() / (income * 12.0).max(1.0);
    let debt_points = if debt_ratio >= DEBT_RATIO_FLOOR {
        0.0
    } else if debt_ratio <= 0.0 {
        DEBT_BAND_MAX
    } else {
        DEBT_BAND_MAX * (1.0 - debt_ratio / DEBT_RATIO_FLOOR)
    };

    let goal_progress = if goals.is_empty() {
        None
    } else {
        Some(goals.iter().map(|g| g.progress()).sum::<f64>() / goals.len() as f64)
    };
    let goal_points = match goal_progress {
        Some(mean) => mean * GOAL_BAND_MAX,
        None => NEUTRAL_GOAL_POINTS,
    };

    ScoreComponents {
        savings_rate,
        savings_points,
        debt_ratio,
        debt_points,
        goal_progress,
        goal_points,
    }
}

/// Score a snapshot's financial health
///
/// Pure over its inputs; the debt list is consulted only through the summary
/// totals and for structural validation.
pub fn score_financial_health(
    summary: &FinancialSummary,
    debts: &[Debt],
    goals: &[FinancialGoal],
) -> Result<FinancialHealthAnalysis, ValidationError> {
    validate_debts(debts)?;
    validate_goals(goals)?;

    let components = score_components(summary, goals);
    let score = components.score();
    let level = HealthLevel::from_score(score);
    let findings = rules::evaluate(&components);

    let analysis = format!(
        "Overall financial health is {} ({}/100): savings contribute {:.0} of 40 points, \
         debt load {:.0} of 35, and goal progress {:.0} of 25.",
        level.as_str(),
        score,
        components.savings_points,
        components.debt_points,
        components.goal_points,
    );

    Ok(FinancialHealthAnalysis {
        score,
        level,
        analysis,
        strengths: findings.strengths,
        weaknesses: findings.weaknesses,
        recommendations: findings.recommendations,
    })
}
