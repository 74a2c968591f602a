//! finsight CLI - Transaction interpreter and financial health scorer
//!
//! Usage:
//!   finsight interpret "Spent 500 on lunch at Zomato"
//!   finsight score --income 100000 --expense 40000
//!   finsight categories

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Interpret { text, json } => commands::cmd_interpret(&text, json),
        Commands::Score {
            income,
            expense,
            savings_rate,
            json,
        } => commands::cmd_score(income, expense, savings_rate, json),
        Commands::Categories { name } => match name {
            Some(name) => commands::cmd_categories_show(&name),
            None => commands::cmd_categories_list(),
        },
    }
}
