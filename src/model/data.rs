//! Snapshot entities supplied by the hosting application
//!
//! The engine treats every list of these as a read-only snapshot per call;
//! derived analyses are plain owned values and never alias the inputs.

use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of debt obligation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DebtType {
    /// Open credit line (credit card, line of credit)
    Revolving,
    /// Amortizing loan with a fixed term
    Installment,
    /// Recurring non-amortizing obligation (rent, subscriptions); excluded
    /// from interest accrual and payoff simulation
    FixedExpense,
}

impl DebtType {
    /// Whether this debt carries an amortizing balance
    pub fn amortizes(&self) -> bool {
        !matches!(self, DebtType::FixedExpense)
    }
}

/// A tracked debt obligation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Creditor name
    pub creditor: String,

    /// Kind of obligation
    pub debt_type: DebtType,

    /// Balance at origination
    pub initial_balance: Money,

    /// Outstanding balance; in [0, initial_balance], never negative
    pub current_balance: Money,

    /// Annual percentage rate (21.5 means 21.5%)
    pub interest_rate: f64,

    /// Required monthly payment
    pub minimum_payment: Money,

    /// Loan term in months (installment debts only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_months: Option<u32>,
}

impl Debt {
    /// Register a payment against this debt; the balance decreases and is
    /// floored at zero
    pub fn register_payment(&mut self, amount: Money) {
        self.current_balance = (self.current_balance - amount).max(Money::ZERO);
    }

    /// Whether the balance has been fully retired
    pub fn is_paid_off(&self) -> bool {
        self.current_balance.is_zero()
    }
}

/// Priority of a financial goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalPriority {
    High,
    Medium,
    Low,
}

/// A savings goal with a target amount and deadline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialGoal {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Target amount; must be positive
    pub target_amount: Money,

    /// Amount saved so far; may exceed the target
    pub current_amount: Money,

    /// Calendar deadline
    pub deadline: NaiveDate,

    /// Goal priority
    pub priority: GoalPriority,
}

impl FinancialGoal {
    /// Register a contribution toward this goal
    ///
    /// Contributions accumulate without capping; scoring clamps progress.
    pub fn register_contribution(&mut self, amount: Money) {
        self.current_amount += amount;
    }

    /// Progress ratio clamped to [0, 1], guarded against a zero target
    pub fn progress(&self) -> f64 {
        if self.target_amount.minor() <= 0 {
            return 0.0;
        }
        let ratio = self.current_amount.minor() as f64 / self.target_amount.minor() as f64;
        ratio.clamp(0.0, 1.0)
    }
}

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// An immutable money movement fact
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: String,

    /// Income or expense; serialized as `type`, the host's field name
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Category label
    pub category: String,

    /// Amount; must be positive
    pub amount: Money,

    /// Free-form description
    pub description: String,

    /// Transaction date
    pub date: NaiveDate,

    /// Link to the debt or goal this payment/contribution belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_item_id: Option<String>,
}

/// An owned asset counted toward net worth
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Category label (Cash, Investment, ...); serialized as `type`, the
    /// host's field name
    #[serde(rename = "type")]
    pub category: String,

    /// Current value; never negative
    pub value: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_debt(balance_minor: i64) -> Debt {
        Debt {
            id: "d1".into(),
            name: "Credit Card".into(),
            creditor: "Bank A".into(),
            debt_type: DebtType::Revolving,
            initial_balance: Money::from_minor(500_000),
            current_balance: Money::from_minor(balance_minor),
            interest_rate: 21.5,
            minimum_payment: Money::from_minor(10_000),
            term_months: None,
        }
    }

    #[test]
    fn test_register_payment_floors_at_zero() {
        let mut debt = test_debt(450_000);
        debt.register_payment(Money::from_minor(50_000));
        assert_eq!(debt.current_balance.minor(), 400_000);

        debt.register_payment(Money::from_minor(1_000_000));
        assert_eq!(debt.current_balance, Money::ZERO);
        assert!(debt.is_paid_off());
    }

    #[test]
    fn test_goal_progress_clamps() {
        let mut goal = FinancialGoal {
            id: "g1".into(),
            name: "Emergency Fund".into(),
            target_amount: Money::from_minor(1_000_000),
            current_amount: Money::from_minor(350_000),
            deadline: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            priority: GoalPriority::High,
        };
        assert_eq!(goal.progress(), 0.35);

        // Overfunded goals clamp to 1.0 but keep the stored amount
        goal.register_contribution(Money::from_minor(900_000));
        assert_eq!(goal.current_amount.minor(), 1_250_000);
        assert_eq!(goal.progress(), 1.0);
    }

    #[test]
    fn test_fixed_expense_does_not_amortize() {
        assert!(DebtType::Revolving.amortizes());
        assert!(DebtType::Installment.amortizes());
        assert!(!DebtType::FixedExpense.amortizes());
    }

    #[test]
    fn test_debt_wire_shape_matches_host() {
        let value = serde_json::to_value(test_debt(450_000)).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("initialBalance"));
        assert!(obj.contains_key("currentBalance"));
        assert!(obj.contains_key("interestRate"));
        assert!(obj.contains_key("minimumPayment"));
        assert_eq!(obj["debtType"], "revolving");
        // Untermed debts omit the field entirely
        assert!(!obj.contains_key("termMonths"));
    }

    #[test]
    fn test_transaction_wire_shape_matches_host() {
        let tx = Transaction {
            id: "t1".into(),
            kind: TransactionKind::Expense,
            category: "Housing".into(),
            amount: Money::from_minor(125_000),
            description: "Rent".into(),
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            related_item_id: Some("d3".into()),
        };
        let value = serde_json::to_value(tx).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["type"], "expense");
        assert_eq!(obj["relatedItemId"], "d3");
        assert_eq!(obj["amount"], 125_000);

        let asset = Asset {
            id: "a1".into(),
            name: "Savings".into(),
            category: "Cash".into(),
            value: Money::from_minor(500_000),
        };
        let value = serde_json::to_value(asset).unwrap();
        assert_eq!(value.as_object().unwrap()["type"], "Cash");
    }
}
