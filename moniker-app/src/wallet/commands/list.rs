use moniker_types::primitives::format_address;

use crate::context::AppContext;
use crate::error::AppError;
use crate::wallet::format::{style_bold, style_dim};
use crate::wallet::ui::{data_table, print_table};

pub fn run(ctx: &AppContext, json: bool) -> Result<(), AppError> {
    let names = ctx.store.names()?;

    if json {
        let entries: Vec<serde_json::Value> = names
            .iter()
            .map(|(address, name)| {
                serde_json::json!({
                    "address": format_address(address),
                    "name": name,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if names.is_empty() {
        println!("  No wallet names stored.");
        println!(
            "  {}",
            style_dim().apply_to("Name one with: moniker rename <ADDRESS> --name <NAME>")
        );
        return Ok(());
    }

    println!();
    println!("  {}", style_bold().apply_to("Wallet names"));
    let mut table = data_table(&["Address", "Name"]);
    for (address, name) in &names {
        table.add_row(vec![format_address(address), name.clone()]);
    }
    print_table(&table);
    println!();

    Ok(())
}
