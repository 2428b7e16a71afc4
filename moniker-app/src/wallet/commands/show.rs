use moniker_types::primitives::{format_address, parse_address};

use crate::context::AppContext;
use crate::error::AppError;
use crate::view_model::RenameWalletInput;
use crate::wallet::format::{print_field, spinner, style_bold};

pub async fn run(ctx: &AppContext, address: &str, json: bool) -> Result<(), AppError> {
    let account = parse_address(address)?;
    let vm = ctx.view_model(account);
    let (events, input) = RenameWalletInput::channel();
    let mut output = vm.transform(input);

    events
        .appear
        .send(())
        .map_err(|_| AppError::ScreenClosed)?;
    drop(events);

    let pb = (ctx.resolution_enabled && !json).then(|| spinner("Resolving ENS name..."));
    // With both inputs closed the stream ends once resolution settles.
    let mut state = None;
    while let Some(next) = output.view_state.recv().await {
        state = Some(next);
    }
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    let state = state.ok_or(AppError::ScreenClosed)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "address": format_address(&account),
                "name": state.text,
                "ens": state.placeholder,
            }))?
        );
        return Ok(());
    }

    println!();
    println!(
        "  {}",
        style_bold().apply_to(state.display_name().unwrap_or("Unnamed wallet"))
    );
    print_field("Address", Some(&format_address(&account)));
    print_field("Name", state.text.as_deref());
    print_field("ENS", state.placeholder.as_deref());
    println!();

    Ok(())
}
