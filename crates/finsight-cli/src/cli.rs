//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};

/// finsight - Turn plain sentences into transactions, and figures into a score
#[derive(Parser)]
#[command(name = "finsight")]
#[command(about = "Free-text transaction interpreter and financial health scorer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interpret a free-text transaction description into a draft
    Interpret {
        /// The description, e.g. "Spent 500 on lunch at Zomato"
        text: String,

        /// Print the draft as JSON instead of the readable summary
        #[arg(long)]
        json: bool,
    },

    /// Score a financial snapshot
    Score {
        /// Total income for the period
        #[arg(long)]
        income: f64,

        /// Total expense for the period
        #[arg(long)]
        expense: f64,

        /// Savings rate percentage (derived from income/expense if omitted)
        ///
        /// May be negative when expenses exceeded income.
        #[arg(long, allow_hyphen_values = true)]
        savings_rate: Option<f64>,

        /// Print the result as JSON instead of the readable summary
        #[arg(long)]
        json: bool,
    },

    /// List the category set and the trigger words behind it
    Categories {
        /// Show a single category (e.g. "Food & Dining" or just "food")
        name: Option<String>,
    },
}
