//! Error types for finsight
//!
//! The interpreter and scorer never fail; malformed input produces a
//! well-defined fallback result. The error type covers the parse surface
//! for the enum names callers feed back in (CLI arguments, stored strings).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown transaction type: {0}")]
    UnknownTransactionType(String),

    #[error("Unknown health status: {0}")]
    UnknownHealthStatus(String),
}

pub type Result<T> = std::result::Result<T, Error>;
