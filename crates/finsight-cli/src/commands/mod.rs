//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `categories` - Category reference commands
//! - `interpret` - Free-text interpretation command
//! - `score` - Health scoring command

pub mod categories;
pub mod interpret;
pub mod score;

// Re-export command functions for main.rs
pub use categories::*;
pub use interpret::*;
pub use score::*;
