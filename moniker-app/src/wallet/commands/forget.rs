use moniker_types::primitives::{format_address, parse_address};

use crate::context::AppContext;
use crate::error::AppError;
use crate::wallet::format::{print_success, style_warn};
use crate::wallet::prompt::confirm;

pub fn run(ctx: &AppContext, address: &str, force: bool) -> Result<(), AppError> {
    let account = parse_address(address)?;
    let address_hex = format_address(&account);

    let Some(name) = ctx.store.name(&account)? else {
        println!("  No name stored for {}.", address_hex);
        return Ok(());
    };

    if !force {
        println!(
            "  {}",
            style_warn().apply_to(format!(
                "This will remove the name '{}' from {}.",
                name, address_hex
            ))
        );
        if !confirm("Remove this name?")? {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    ctx.store.remove(&account)?;
    tracing::info!(address = %address_hex, "wallet name removed");

    print_success(&format!("Removed the name of {}", address_hex));
    Ok(())
}
