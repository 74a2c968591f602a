//! Domain models for finsight

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Transaction direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money going out (the default when nothing signals otherwise)
    #[default]
    Expense,
    /// Money coming in
    Income,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            _ => Err(Error::UnknownTransactionType(s.to_string())),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixed category set for transaction drafts
///
/// Serialized names match the strings the product shows and stores
/// (e.g. "Food & Dining"), so drafts can be submitted to the backend as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    FoodDining,
    Transportation,
    Shopping,
    Entertainment,
    #[serde(rename = "Bills & Utilities")]
    BillsUtilities,
    Healthcare,
    Education,
    Travel,
    Rent,
    #[serde(rename = "EMI")]
    Emi,
    Insurance,
    Gifts,
    Salary,
    Freelance,
    Business,
    Investments,
    #[default]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FoodDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::BillsUtilities => "Bills & Utilities",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Travel => "Travel",
            Self::Rent => "Rent",
            Self::Emi => "EMI",
            Self::Insurance => "Insurance",
            Self::Gifts => "Gifts",
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Business => "Business",
            Self::Investments => "Investments",
            Self::Other => "Other",
        }
    }

    /// Categories that always denote money coming in.
    ///
    /// A draft resolving to one of these is classified as income even when
    /// the text itself carried no income keyword.
    pub fn is_income_source(&self) -> bool {
        matches!(
            self,
            Self::Salary | Self::Freelance | Self::Business | Self::Investments
        )
    }

    /// All categories, in display order
    pub fn all() -> &'static [Category] {
        &[
            Self::FoodDining,
            Self::Transportation,
            Self::Shopping,
            Self::Entertainment,
            Self::BillsUtilities,
            Self::Healthcare,
            Self::Education,
            Self::Travel,
            Self::Rent,
            Self::Emi,
            Self::Insurance,
            Self::Gifts,
            Self::Salary,
            Self::Freelance,
            Self::Business,
            Self::Investments,
            Self::Other,
        ]
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food & dining" | "food and dining" | "food" => Ok(Self::FoodDining),
            "transportation" | "transport" => Ok(Self::Transportation),
            "shopping" => Ok(Self::Shopping),
            "entertainment" => Ok(Self::Entertainment),
            "bills & utilities" | "bills and utilities" | "bills" | "utilities" => {
                Ok(Self::BillsUtilities)
            }
            "healthcare" => Ok(Self::Healthcare),
            "education" => Ok(Self::Education),
            "travel" => Ok(Self::Travel),
            "rent" => Ok(Self::Rent),
            "emi" => Ok(Self::Emi),
            "insurance" => Ok(Self::Insurance),
            "gifts" => Ok(Self::Gifts),
            "salary" => Ok(Self::Salary),
            "freelance" => Ok(Self::Freelance),
            "business" => Ok(Self::Business),
            "investments" => Ok(Self::Investments),
            "other" => Ok(Self::Other),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured result of interpreting a free-text transaction description
///
/// Always a best-effort value: amount 0 and category Other are valid
/// "no match" results, not errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDraft {
    /// Parsed monetary value; 0 if no numeral was found
    pub amount: f64,
    /// Inferred transaction direction
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// First matching category from the trigger table, or Other
    pub category: Category,
    /// Input text with the amount token(s) stripped and trimmed
    pub description: String,
}

/// Aggregate income/expense figures for a scoring period
///
/// Caller-supplied; the scorer does not validate consistency between
/// `savings_rate` and the income/expense figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSnapshot {
    pub total_income: f64,
    pub total_expense: f64,
    /// Percentage of income kept; negative when expense exceeds income
    pub savings_rate: f64,
}

/// Qualitative tier for a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    Critical,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Critical => "Critical",
        }
    }

    /// Map a clamped 0-100 score to its tier
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Excellent
        } else if score >= 60 {
            Self::Good
        } else if score >= 40 {
            Self::Fair
        } else {
            Self::Critical
        }
    }

    /// Fixed human-readable message for the tier
    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Your finances are in great shape!",
            Self::Good => "You're managing well, keep it up!",
            Self::Fair => "Room for improvement. Try saving more.",
            Self::Critical => "Attention needed! Review your spending.",
        }
    }
}

impl std::str::FromStr for HealthStatus {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excellent" => Ok(Self::Excellent),
            "good" => Ok(Self::Good),
            "fair" => Ok(Self::Fair),
            "critical" => Ok(Self::Critical),
            _ => Err(Error::UnknownHealthStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of scoring a financial snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScore {
    /// Final score, clamped into 0-100
    pub score: u8,
    /// Tier derived from the score alone
    pub status: HealthStatus,
    /// Fixed tier message
    pub message: String,
    /// Expense as an integer percentage of income; pinned to 100 when
    /// income is zero, otherwise unclamped (can exceed 100)
    pub spending_ratio: i64,
}
