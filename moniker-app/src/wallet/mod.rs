pub mod cli;
pub mod commands;
pub mod format;
pub mod prompt;
pub mod screen;
pub mod ui;

use cli::WalletCommand;

use crate::context::AppContext;
use crate::error::AppError;

/// Run a wallet subcommand.
pub async fn run(ctx: &AppContext, command: WalletCommand) -> Result<(), AppError> {
    match command {
        WalletCommand::Show { address, json } => commands::show::run(ctx, &address, json).await,
        WalletCommand::Rename {
            address,
            name,
            json,
        } => commands::rename::run(ctx, &address, name.as_deref(), json).await,
        WalletCommand::List { json } => commands::list::run(ctx, json),
        WalletCommand::Forget { address, force } => commands::forget::run(ctx, &address, force),
    }
}
