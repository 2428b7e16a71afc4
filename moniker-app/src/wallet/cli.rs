use clap::Subcommand;

/// Wallet name subcommands.
#[derive(Subcommand)]
pub enum WalletCommand {
    /// Show the stored name and ENS name of a wallet
    Show {
        /// Wallet address (0x-prefixed hex)
        address: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Give a wallet a new display name
    Rename {
        /// Wallet address (0x-prefixed hex)
        address: String,
        /// New name; prompts when omitted. An empty name clears the stored one
        #[arg(long)]
        name: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all stored wallet names
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove the stored name of a wallet
    Forget {
        /// Wallet address (0x-prefixed hex)
        address: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}
