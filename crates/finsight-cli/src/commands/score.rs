//! Health scoring command

use anyhow::Result;
use finsight_core::{score, FinancialSnapshot};
use tracing::debug;

/// Derive a savings rate when the caller didn't supply one:
/// (income - expense) / income as a percentage, 0 when there is no income.
///
/// This is calling-application mapping; the scorer itself always takes the
/// rate it is given.
pub fn resolve_savings_rate(income: f64, expense: f64, explicit: Option<f64>) -> f64 {
    match explicit {
        Some(rate) => rate,
        None if income > 0.0 => (income - expense) / income * 100.0,
        None => 0.0,
    }
}

pub fn cmd_score(income: f64, expense: f64, savings_rate: Option<f64>, json: bool) -> Result<()> {
    if income < 0.0 {
        anyhow::bail!("Income cannot be negative: {}", income);
    }
    if expense < 0.0 {
        anyhow::bail!("Expense cannot be negative: {}", expense);
    }

    let rate = resolve_savings_rate(income, expense, savings_rate);
    if savings_rate.is_none() {
        debug!("Derived savings rate: {:.1}%", rate);
    }

    let snapshot = FinancialSnapshot {
        total_income: income,
        total_expense: expense,
        savings_rate: rate,
    };
    let result = score(&snapshot);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!();
    println!("💰 Financial Health");
    println!("   ─────────────────────────────────────────────");
    println!("   Score:          {}/100 ({})", result.score, result.status);
    println!("   Spending ratio: {}% of income", result.spending_ratio);
    println!();
    println!("   {}", result.message);

    Ok(())
}
