use std::path::Path;

use moniker_resolver::server::{load_name_table, start_name_server};

use crate::error::AppError;
use crate::wallet::format::{print_success, style_dim};

/// Serve reverse lookups from a JSON name table until Ctrl-C.
pub async fn run(names_path: &Path, addr: &str) -> Result<(), AppError> {
    let names = load_name_table(names_path)?;
    let count = names.len();
    let (handle, local_addr) = start_name_server(addr, names).await?;

    print_success(&format!(
        "Serving {} name(s) from {} on http://{}",
        count,
        names_path.display(),
        local_addr
    ));
    println!("  {}", style_dim().apply_to("Press Ctrl-C to stop."));

    tokio::signal::ctrl_c().await?;
    tracing::info!("Received shutdown signal");

    if handle.stop().is_err() {
        tracing::debug!("name server already stopped");
    }
    handle.stopped().await;
    Ok(())
}
