//! Integration tests for finsight-core
//!
//! These tests exercise the library the way a calling application would:
//! free text in, draft out, aggregate figures in, score out.

use finsight_core::{
    score, Category, FinancialSnapshot, HealthStatus, Interpreter, TransactionType,
};

fn snapshot(income: f64, expense: f64, savings_rate: f64) -> FinancialSnapshot {
    FinancialSnapshot {
        total_income: income,
        total_expense: expense,
        savings_rate,
    }
}

// =============================================================================
// Interpreter scenarios
// =============================================================================

#[test]
fn test_smart_entry_examples() {
    // The example sentences the entry form suggests to the user
    let interpreter = Interpreter::new();

    let draft = interpreter.interpret("Spent 500 on lunch at Zomato");
    assert_eq!(draft.amount, 500.0);
    assert_eq!(draft.transaction_type, TransactionType::Expense);
    assert_eq!(draft.category, Category::FoodDining);

    let draft = interpreter.interpret("Uber ride to office ₹150");
    assert_eq!(draft.amount, 150.0);
    assert_eq!(draft.category, Category::Transportation);

    let draft = interpreter.interpret("Received salary 50000");
    assert_eq!(draft.amount, 50000.0);
    assert_eq!(draft.transaction_type, TransactionType::Income);
    assert_eq!(draft.category, Category::Salary);

    let draft = interpreter.interpret("Netflix subscription 199rs");
    assert_eq!(draft.amount, 199.0);
    assert_eq!(draft.transaction_type, TransactionType::Expense);
    assert_eq!(draft.category, Category::Entertainment);

    let draft = interpreter.interpret("Bought groceries for 1500 rupees from BigBasket");
    assert_eq!(draft.amount, 1500.0);
    assert_eq!(draft.category, Category::FoodDining);
}

#[test]
fn test_draft_invariants_over_arbitrary_input() {
    let interpreter = Interpreter::new();
    let inputs = [
        "",
        "    ",
        "₹",
        "rs",
        "1234567890",
        "spent spent spent",
        "salary bonus freelance dividend",
        "ate 2 samosas for 30",
        "no keywords whatsoever here",
        "!!!@@@###",
    ];

    for text in inputs {
        let draft = interpreter.interpret(text);
        assert!(draft.amount >= 0.0, "input: {text:?}");
        assert!(
            Category::all().contains(&draft.category),
            "input: {text:?}"
        );
        assert!(!draft.description.is_empty(), "input: {text:?}");
        // No hidden state between calls
        assert_eq!(draft, interpreter.interpret(text), "input: {text:?}");
    }
}

#[test]
fn test_income_category_forces_income_type() {
    let interpreter = Interpreter::new();
    for text in [
        "monthly salary 50000",
        "gig work 8000",
        "client payment 12000",
        "sip 5000",
    ] {
        let draft = interpreter.interpret(text);
        assert!(draft.category.is_income_source(), "input: {text:?}");
        assert_eq!(
            draft.transaction_type,
            TransactionType::Income,
            "input: {text:?}"
        );
    }
}

#[test]
fn test_draft_serializes_with_product_wire_names() {
    let draft = Interpreter::new().interpret("Spent 500 on lunch at Zomato");
    let json = serde_json::to_value(&draft).unwrap();

    assert_eq!(json["amount"], 500.0);
    assert_eq!(json["type"], "expense");
    assert_eq!(json["category"], "Food & Dining");
    assert_eq!(json["description"], "Spent on lunch at Zomato");
}

// =============================================================================
// Scorer scenarios
// =============================================================================

#[test]
fn test_score_tiers_across_profiles() {
    // Saver: clamped to the top
    let result = score(&snapshot(100000.0, 40000.0, 60.0));
    assert_eq!(result.score, 100);
    assert_eq!(result.status, HealthStatus::Excellent);

    // Empty snapshot: neutral
    let result = score(&snapshot(0.0, 0.0, 0.0));
    assert_eq!(result.score, 50);
    assert_eq!(result.status, HealthStatus::Fair);
    assert_eq!(result.spending_ratio, 100);

    // Overspender: both signals negative
    let result = score(&snapshot(50000.0, 55000.0, -10.0));
    assert_eq!(result.score, 30);
    assert_eq!(result.status, HealthStatus::Critical);
}

#[test]
fn test_score_bounds_and_status_consistency() {
    let samples = [
        snapshot(0.0, 0.0, 0.0),
        snapshot(0.0, 10000.0, -50.0),
        snapshot(1.0, 0.0, 100.0),
        snapshot(75000.0, 74999.0, 0.0),
        snapshot(100000.0, 250000.0, -150.0),
    ];
    for s in samples {
        let result = score(&s);
        assert!(result.score <= 100, "snapshot: {s:?}");
        assert_eq!(result.status, HealthStatus::from_score(result.score));
        assert_eq!(result.message, result.status.message());
    }
}

#[test]
fn test_score_serializes_with_product_wire_names() {
    let json = serde_json::to_value(score(&snapshot(100000.0, 40000.0, 60.0))).unwrap();

    assert_eq!(json["score"], 100);
    assert_eq!(json["status"], "Excellent");
    assert_eq!(json["spendingRatio"], 40);
    assert_eq!(json["message"], "Your finances are in great shape!");
}

// =============================================================================
// Interpret -> score round trip
// =============================================================================

#[test]
fn test_drafts_feed_a_scoring_period() {
    // A month of drafts aggregated by a calling application, then scored.
    let interpreter = Interpreter::new();
    let entries = [
        "Received salary 50000",
        "Rent 15000",
        "Spent 500 on lunch at Zomato",
        "Uber to airport 650",
        "Electricity bill 1200",
    ];

    let mut income = 0.0;
    let mut expense = 0.0;
    for text in entries {
        let draft = interpreter.interpret(text);
        match draft.transaction_type {
            TransactionType::Income => income += draft.amount,
            TransactionType::Expense => expense += draft.amount,
        }
    }

    assert_eq!(income, 50000.0);
    assert_eq!(expense, 17350.0);

    let savings_rate = (income - expense) / income * 100.0;
    let result = score(&snapshot(income, expense, savings_rate));

    // savings ~65% (+40), spending ~35% (+30): clamped to 100
    assert_eq!(result.score, 100);
    assert_eq!(result.status, HealthStatus::Excellent);
    assert_eq!(result.spending_ratio, 35);
}
