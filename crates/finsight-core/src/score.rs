//! Financial health scoring
//!
//! Maps a financial snapshot (income, expense, savings rate) to a bounded
//! 0-100 score with a qualitative tier. Two independent signals (how much
//! you keep, how much you spend relative to what you earn) are combined
//! additively from a neutral baseline, so strong performance on one axis
//! partially compensates for weakness on the other.

use tracing::debug;

use crate::models::{FinancialSnapshot, HealthScore, HealthStatus};

/// Neutral starting point before either signal is applied
const BASELINE_SCORE: f64 = 50.0;

/// Score a financial snapshot.
///
/// Pure arithmetic over the given numbers; never fails. The savings rate is
/// taken from the snapshot as-is, while the spending ratio is recomputed
/// from income and expense (pinned to 100% when income is zero).
pub fn score(snapshot: &FinancialSnapshot) -> HealthScore {
    let mut points = BASELINE_SCORE;

    // Savings-rate band, evaluated top-down, first match wins
    points += if snapshot.savings_rate >= 30.0 {
        40.0
    } else if snapshot.savings_rate >= 20.0 {
        30.0
    } else if snapshot.savings_rate >= 10.0 {
        20.0
    } else if snapshot.savings_rate >= 0.0 {
        10.0
    } else {
        -10.0
    };

    let spending_ratio = if snapshot.total_income > 0.0 {
        (snapshot.total_expense / snapshot.total_income) * 100.0
    } else {
        100.0
    };

    // Spending-ratio band
    points += if spending_ratio < 50.0 {
        30.0
    } else if spending_ratio < 60.0 {
        25.0
    } else if spending_ratio < 70.0 {
        20.0
    } else if spending_ratio < 80.0 {
        10.0
    } else if spending_ratio < 90.0 {
        5.0
    } else {
        -10.0
    };

    let final_score = (points.round() as i64).clamp(0, 100) as u8;
    let status = HealthStatus::from_score(final_score);

    debug!(
        "Scored snapshot: score={}, status={}, spending_ratio={:.1}%",
        final_score, status, spending_ratio
    );

    HealthScore {
        score: final_score,
        status,
        message: status.message().to_string(),
        spending_ratio: spending_ratio.round() as i64,
    }
}
