//! Free-text transaction interpreter
//!
//! Turns a sentence like "Spent 500 on lunch at Zomato" into a structured
//! draft (amount, type, category, cleaned description). This is a deliberately
//! cheap, deterministic classifier with no external calls, so it can run
//! instantly as the user types; the form lets the user edit any field before
//! committing, so precision is traded for responsiveness.

use regex::Regex;
use tracing::debug;

use crate::models::{Category, TransactionDraft, TransactionType};

/// Words that signal money coming in, checked case-insensitively as substrings
const INCOME_KEYWORDS: &[&str] = &[
    "salary",
    "received",
    "got",
    "earned",
    "income",
    "bonus",
    "freelance",
    "payment received",
    "credited",
];

/// Ordered trigger table for category resolution.
///
/// Matching is a case-insensitive substring scan in table order; the first
/// category with any matching trigger wins, so earlier rows shadow later
/// ones (e.g. "travel" resolves to Transportation, not Travel).
const CATEGORY_TRIGGERS: &[(Category, &[&str])] = &[
    (
        Category::FoodDining,
        &[
            "food",
            "lunch",
            "dinner",
            "breakfast",
            "restaurant",
            "zomato",
            "swiggy",
            "cafe",
            "coffee",
            "tea",
            "snacks",
            "groceries",
            "vegetables",
            "fruits",
            "khana",
            "biryani",
            "pizza",
            "burger",
            "chai",
            "samosa",
        ],
    ),
    (
        Category::Transportation,
        &[
            "uber", "ola", "cab", "taxi", "auto", "rickshaw", "metro", "bus", "train", "petrol",
            "diesel", "fuel", "parking", "toll", "travel",
        ],
    ),
    (
        Category::Shopping,
        &[
            "shopping", "amazon", "flipkart", "myntra", "clothes", "shoes", "dress", "shirt",
            "jeans", "bought", "purchase", "mall",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "movie",
            "netflix",
            "prime",
            "hotstar",
            "spotify",
            "game",
            "gaming",
            "concert",
            "show",
            "entertainment",
            "fun",
        ],
    ),
    (
        Category::BillsUtilities,
        &[
            "electricity",
            "water",
            "gas",
            "internet",
            "wifi",
            "broadband",
            "mobile",
            "recharge",
            "bill",
            "airtel",
            "jio",
            "vi",
        ],
    ),
    (
        Category::Healthcare,
        &[
            "medicine",
            "doctor",
            "hospital",
            "medical",
            "health",
            "pharmacy",
            "chemist",
            "apollo",
            "clinic",
            "treatment",
        ],
    ),
    (
        Category::Education,
        &[
            "book", "course", "udemy", "education", "school", "college", "tuition", "fees",
            "class", "coaching", "exam",
        ],
    ),
    (
        Category::Travel,
        &[
            "flight",
            "hotel",
            "vacation",
            "trip",
            "holiday",
            "booking",
            "makemytrip",
            "goibibo",
            "airbnb",
            "oyo",
        ],
    ),
    (
        Category::Rent,
        &["rent", "house rent", "pg", "hostel", "accommodation"],
    ),
    (
        Category::Emi,
        &["emi", "loan", "installment", "credit card bill"],
    ),
    (Category::Insurance, &["insurance", "lic", "policy", "premium"]),
    (
        Category::Gifts,
        &["gift", "present", "birthday", "anniversary", "wedding gift"],
    ),
    (Category::Salary, &["salary", "paycheck", "monthly salary"]),
    (
        Category::Freelance,
        &["freelance", "project payment", "client payment", "gig"],
    ),
    (
        Category::Business,
        &["business", "investment return", "profit", "dividend"],
    ),
    (
        Category::Investments,
        &["mutual fund", "stocks", "sip", "investment", "fd", "fixed deposit"],
    ),
];

/// Free-text transaction interpreter
///
/// Holds the compiled amount patterns; construct once and reuse. The
/// interpreter is stateless between calls and safe to share across threads.
pub struct Interpreter {
    /// Finds the first amount token: an optional currency marker, a numeral
    /// with optional thousands separators and up to two decimal places, and
    /// an optional currency word on either side
    amount_re: Regex,
    /// Strips every amount-shaped token when cleaning the description
    amount_strip_re: Regex,
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            amount_re: Regex::new(
                r"(?i)₹?\s*(\d+(?:,\d{3})*(?:\.\d{2})?)\s*(?:rs|rupees|inr)?|(?:rs|rupees|inr)?\s*(\d+(?:,\d{3})*(?:\.\d{2})?)",
            )
            .expect("valid regex"),
            amount_strip_re: Regex::new(r"(?i)₹?\s*\d+(?:,\d{3})*(?:\.\d{2})?\s*(?:rs|rupees|inr)?")
                .expect("valid regex"),
        }
    }

    /// Interpret a free-text transaction description into a draft.
    ///
    /// Never fails: amount 0 and category Other are valid "no match"
    /// results. Type inference runs in fixed precedence: income keywords,
    /// then the expense default, then the income-category override (a draft
    /// resolving to Salary/Freelance/Business/Investments is income
    /// regardless of keywords).
    pub fn interpret(&self, text: &str) -> TransactionDraft {
        let lower = text.to_lowercase();

        let amount = self.extract_amount(text);

        let mut transaction_type = if INCOME_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            TransactionType::Income
        } else {
            TransactionType::Expense
        };

        let category = resolve_category(&lower);

        // Override after resolution: income categories win over the keyword
        // check, even when the text also carried expense wording.
        if category.is_income_source() {
            transaction_type = TransactionType::Income;
        }

        let stripped = self.amount_strip_re.replace_all(text, "");
        let trimmed = stripped.trim();
        let description = if trimmed.is_empty() {
            format!("{} expense", category)
        } else {
            trimmed.to_string()
        };

        debug!(
            "Interpreted draft: amount={}, type={}, category={}",
            amount, transaction_type, category
        );

        TransactionDraft {
            amount,
            transaction_type,
            category,
            description,
        }
    }

    /// Extract the first amount token from the text; 0 if none found.
    ///
    /// When multiple numerals could match, the first successful match wins.
    /// This is a fixed policy for determinism, not a precision guarantee.
    fn extract_amount(&self, text: &str) -> f64 {
        let Some(caps) = self.amount_re.captures(text) else {
            return 0.0;
        };

        caps.get(1)
            .or_else(|| caps.get(2))
            .and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok())
            .unwrap_or(0.0)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Trigger words for a category, in table order; empty for Other.
pub fn category_triggers(category: Category) -> &'static [&'static str] {
    CATEGORY_TRIGGERS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, triggers)| *triggers)
        .unwrap_or(&[])
}

/// Scan the trigger table in order; first category with a matching trigger
/// wins, no match resolves to Other.
fn resolve_category(lower: &str) -> Category {
    for (category, triggers) in CATEGORY_TRIGGERS {
        if triggers.iter().any(|trigger| lower.contains(trigger)) {
            return *category;
        }
    }
    Category::Other
}
