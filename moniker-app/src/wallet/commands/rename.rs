use moniker_types::name::normalize_wallet_name;
use moniker_types::primitives::{format_address, parse_address};

use crate::context::AppContext;
use crate::error::AppError;
use crate::view_model::RenameWalletInput;
use crate::wallet::format::{print_field, print_success, spinner, style_bold, style_dim};
use crate::wallet::prompt::prompt_wallet_name;
use crate::wallet::screen::settled_view_state;

pub async fn run(
    ctx: &AppContext,
    address: &str,
    name: Option<&str>,
    json: bool,
) -> Result<(), AppError> {
    let account = parse_address(address)?;
    let address_hex = format_address(&account);
    let vm = ctx.view_model(account);
    let (events, input) = RenameWalletInput::channel();
    let mut output = vm.transform(input);

    events
        .appear
        .send(())
        .map_err(|_| AppError::ScreenClosed)?;

    let pb = (ctx.resolution_enabled && !json).then(|| spinner("Resolving ENS name..."));
    let state = settled_view_state(ctx, &mut output).await?;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let entered = match name {
        Some(name) => name.to_string(),
        None => {
            println!();
            println!("  {}", style_bold().apply_to(vm.title()));
            print_field("Address", Some(&address_hex));
            print_field("Name", state.text.as_deref());
            if let Some(ens) = &state.placeholder {
                print_field("ENS", Some(ens));
            }
            println!(
                "  {}",
                style_dim().apply_to("Leave empty to clear the stored name.")
            );
            prompt_wallet_name(vm.wallet_name_title(), state.text.as_deref())?
        }
    };

    events
        .save_wallet_name
        .send(entered.clone())
        .map_err(|_| AppError::ScreenClosed)?;
    drop(events);

    if output.wallet_name_saved.recv().await.is_none() {
        return Err(AppError::NameNotSaved {
            address: address_hex,
        });
    }

    let saved = normalize_wallet_name(&entered);
    if json {
        println!(
            "{}",
            serde_json::json!({ "address": address_hex, "name": saved })
        );
        return Ok(());
    }

    println!();
    match saved {
        Some(name) => print_success(&format!("Named {} '{}'", address_hex, name)),
        None => print_success(&format!("Cleared the name of {}", address_hex)),
    }
    println!();

    Ok(())
}
