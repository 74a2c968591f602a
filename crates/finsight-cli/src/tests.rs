//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use crate::commands::{self, resolve_savings_rate};

// ========== Interpret Command Tests ==========

#[test]
fn test_cmd_interpret() {
    assert!(commands::cmd_interpret("Spent 500 on lunch at Zomato", false).is_ok());
    assert!(commands::cmd_interpret("Received salary 50000", true).is_ok());
    // Empty text is still a valid (fallback) draft, not an error
    assert!(commands::cmd_interpret("", false).is_ok());
}

// ========== Score Command Tests ==========

#[test]
fn test_cmd_score() {
    assert!(commands::cmd_score(100000.0, 40000.0, Some(60.0), false).is_ok());
    assert!(commands::cmd_score(0.0, 0.0, None, true).is_ok());
}

#[test]
fn test_cmd_score_rejects_negative_figures() {
    assert!(commands::cmd_score(-1.0, 0.0, None, false).is_err());
    assert!(commands::cmd_score(0.0, -1.0, None, false).is_err());
    // A negative savings rate is legitimate (overspending), not an error
    assert!(commands::cmd_score(100.0, 150.0, Some(-50.0), false).is_ok());
}

#[test]
fn test_resolve_savings_rate() {
    assert_eq!(resolve_savings_rate(100000.0, 40000.0, None), 60.0);
    assert_eq!(resolve_savings_rate(0.0, 500.0, None), 0.0);
    // An explicit rate always wins over the derived one
    assert_eq!(resolve_savings_rate(100.0, 40.0, Some(-10.0)), -10.0);
}

// ========== Categories Command Tests ==========

#[test]
fn test_cmd_categories() {
    assert!(commands::cmd_categories_list().is_ok());
    assert!(commands::cmd_categories_show("food").is_ok());
    assert!(commands::cmd_categories_show("Food & Dining").is_ok());
    assert!(commands::cmd_categories_show("salary").is_ok());
    assert!(commands::cmd_categories_show("bogus").is_err());
}
