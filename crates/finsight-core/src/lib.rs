//! finsight Core Library
//!
//! Shared functionality for the finsight personal finance tool:
//! - Free-text transaction interpretation (amount, type, category, description)
//! - Financial health scoring (0-100 score with a qualitative tier)
//!
//! Both components are stateless, synchronous, and side-effect free: each
//! call only reads its own input and allocates its own output, so they can
//! be invoked concurrently with no coordination.

pub mod error;
pub mod interpret;
pub mod models;
pub mod score;

pub use error::{Error, Result};
pub use interpret::{category_triggers, Interpreter};
pub use models::{
    Category, FinancialSnapshot, HealthScore, HealthStatus, TransactionDraft, TransactionType,
};
pub use score::score;
