//! Financial Engine CLI
//!
//! Demo binary: runs the full engine over a sample snapshot and prints the
//! summary, strategy comparison, health report, and an extra-payment sweep.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use financial_engine::{
    compare_strategies, score_financial_health, summarize, sweep_extra_payments,
    validate_snapshot, Asset, Debt, DebtType, FinancialGoal, GoalPriority, Money, Transaction,
    TransactionKind,
};

#[derive(Parser, Debug)]
#[command(name = "financial_engine", about = "Debt strategy and financial health demo")]
struct Args {
    /// Extra monthly payment beyond the minimums, in major units
    #[arg(long, default_value_t = 100.0)]
    extra_payment: f64,

    /// Print all derived analyses as JSON instead of a report
    #[arg(long)]
    json: bool,
}

fn sample_debts() -> Vec<Debt> {
    vec![
        Debt {
            id: "d1".into(),
            name: "Credit Card".into(),
            creditor: "Bank A".into(),
            debt_type: DebtType::Revolving,
            initial_balance: Money::from_major(5000.0),
            current_balance: Money::from_major(4500.0),
            interest_rate: 21.5,
            minimum_payment: Money::from_major(100.0),
            term_months: None,
        },
        Debt {
            id: "d2".into(),
            name: "Student Loan".into(),
            creditor: "Government".into(),
            debt_type: DebtType::Installment,
            initial_balance: Money::from_major(20_000.0),
            current_balance: Money::from_major(18_500.0),
            interest_rate: 5.8,
            minimum_payment: Money::from_major(250.0),
            term_months: Some(120),
        },
        Debt {
            id: "d3".into(),
            name: "Monthly Rent".into(),
            creditor: "Landlord".into(),
            debt_type: DebtType::FixedExpense,
            initial_balance: Money::ZERO,
            current_balance: Money::ZERO,
            interest_rate: 0.0,
            minimum_payment: Money::from_major(1250.0),
            term_months: None,
        },
    ]
}

fn sample_goals() -> Vec<FinancialGoal> {
    vec![
        FinancialGoal {
            id: "g1".into(),
            name: "Emergency Fund".into(),
            target_amount: Money::from_major(10_000.0),
            current_amount: Money::from_major(3_500.0),
            deadline: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            priority: GoalPriority::High,
        },
        FinancialGoal {
            id: "g2".into(),
            name: "Trip to Japan".into(),
            target_amount: Money::from_major(8_000.0),
            current_amount: Money::from_major(1_200.0),
            deadline: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
            priority: GoalPriority::Medium,
        },
    ]
}

fn sample_assets() -> Vec<Asset> {
    vec![
        Asset {
            id: "a1".into(),
            name: "Checking Account".into(),
            category: "Cash".into(),
            value: Money::from_major(5_000.0),
        },
        Asset {
            id: "a2".into(),
            name: "401k".into(),
            category: "Investment".into(),
            value: Money::from_major(25_000.0),
        },
    ]
}

fn sample_transactions() -> Vec<Transaction> {
    let tx = |id: &str, kind, category: &str, amount: f64, description: &str, day| Transaction {
        id: id.into(),
        kind,
        category: category.into(),
        amount: Money::from_major(amount),
        description: description.into(),
        date: NaiveDate::from_ymd_opt(2024, 7, day).unwrap(),
        related_item_id: None,
    };
    vec![
        tx("t1", TransactionKind::Income, "Salary", 5000.0, "Monthly salary", 1),
        tx("t2", TransactionKind::Expense, "Rent", 1500.0, "July rent", 1),
        tx("t3", TransactionKind::Expense, "Groceries", 400.0, "Weekly shopping", 5),
        tx("t4", TransactionKind::Expense, "Transport", 150.0, "Fuel", 10),
        tx("t5", TransactionKind::Expense, "Leisure", 200.0, "Movies and dinner", 12),
        tx("t6", TransactionKind::Income, "Freelance", 750.0, "Design project", 15),
        tx("t7", TransactionKind::Expense, "Utilities", 100.0, "Internet bill", 18),
    ]
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let debts = sample_debts();
    let goals = sample_goals();
    let assets = sample_assets();
    let transactions = sample_transactions();
    let extra = Money::from_major(args.extra_payment);

    validate_snapshot(&transactions, &debts, &goals, &assets)?;
    let summary = summarize(&transactions, &debts, &assets)?;
    let strategy = compare_strategies(&debts, extra)?;
    let health = score_financial_health(&summary, &debts, &goals)?;

    let sweep_extras: Vec<Money> =
        [0.0, 50.0, 100.0, 250.0, 500.0].map(Money::from_major).to_vec();
    let sweep = sweep_extra_payments(&debts, &sweep_extras)?;

    if args.json {
        let report = serde_json::json!({
            "summary": summary,
            "strategy": strategy,
            "health": health,
            "sweep": sweep,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Financial Engine v0.1.0");
    println!("=======================\n");

    println!("Summary:");
    println!("  Income:     ${}", summary.income);
    println!("  Expenses:   ${}", summary.expenses);
    println!("  Total Debt: ${}", summary.total_debt);
    println!("  Net Worth:  ${}", summary.net_worth);
    println!();

    println!("Strategy (extra payment ${}):", extra);
    for (label, branch) in [("Snowball", &strategy.snowball), ("Avalanche", &strategy.avalanche)] {
        match branch.payoff_time_months {
            Some(months) => println!(
                "  {:<10} {:>4} months, ${} interest",
                label, months, branch.total_interest
            ),
            None => println!("  {:<10} does not pay off within the horizon", label),
        }
    }
    println!("  Recommendation: {}", strategy.recommendation.as_str());
    println!("  {}", strategy.reasoning);
    println!();

    println!("Health: {}/100 ({})", health.score, health.level.as_str());
    println!("  {}", health.analysis);
    for s in &health.strengths {
        println!("  + {}", s);
    }
    for w in &health.weaknesses {
        println!("  - {}", w);
    }
    for r in &health.recommendations {
        println!("  > {}", r);
    }
    println!();

    println!("Extra-payment sweep:");
    println!("{:>8} {:>10} {:>16} {:>14}", "Extra", "Months", "Interest", "Strategy");
    for point in &sweep {
        let best = match point.analysis.recommendation {
            financial_engine::PayoffOrdering::Snowball => &point.analysis.snowball,
            financial_engine::PayoffOrdering::Avalanche => &point.analysis.avalanche,
        };
        let months = best
            .payoff_time_months
            .map(|m| m.to_string())
            .unwrap_or_else(|| "never".to_string());
        println!(
            "{:>8} {:>10} {:>16} {:>14}",
            point.extra_payment.to_string(),
            months,
            best.total_interest.to_string(),
            point.analysis.recommendation.as_str(),
        );
    }

    Ok(())
}
