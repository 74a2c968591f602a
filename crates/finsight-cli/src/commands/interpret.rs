//! Free-text interpretation command

use anyhow::Result;
use finsight_core::Interpreter;

pub fn cmd_interpret(text: &str, json: bool) -> Result<()> {
    let draft = Interpreter::new().interpret(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&draft)?);
        return Ok(());
    }

    println!();
    println!("🧾 Transaction Draft");
    println!("   ─────────────────────────────────────────────");
    println!("   Amount:      ₹{:.2}", draft.amount);
    println!("   Type:        {}", draft.transaction_type);
    println!("   Category:    {}", draft.category);
    println!("   Description: {}", draft.description);

    if draft.amount == 0.0 {
        println!();
        println!("   No amount found in the text. Fill it in before saving.");
    }

    Ok(())
}
