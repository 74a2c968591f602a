//! Category reference commands

use anyhow::Result;
use finsight_core::{category_triggers, Category};

pub fn cmd_categories_list() -> Result<()> {
    println!();
    println!("🏷️  Categories");
    println!("   ─────────────────────────────────────────────");

    for category in Category::all() {
        let triggers = category_triggers(*category);
        if triggers.is_empty() {
            println!("   {} (fallback)", category);
        } else {
            println!("   {} ({} triggers)", category, triggers.len());
        }
    }

    println!();
    println!("   Run 'finsight categories NAME' to see the trigger words.");

    Ok(())
}

pub fn cmd_categories_show(name: &str) -> Result<()> {
    let category: Category = name.parse()?;
    let triggers = category_triggers(category);

    println!();
    println!("🏷️  {}", category);
    println!("   ─────────────────────────────────────────────");
    if triggers.is_empty() {
        println!("   Fallback category; no trigger words resolve to it directly.");
    } else {
        println!("   Triggers: {}", triggers.join(", "));
    }
    if category.is_income_source() {
        println!("   Drafts resolving here are always classified as income.");
    }

    Ok(())
}
