use clap::{Parser, Subcommand};

use crate::config::{AppConfig, CONFIG_FILE_NAME};
use crate::context::AppContext;
use crate::error::AppError;
use crate::wallet::cli::WalletCommand;
use crate::wallet::format::print_success;

#[derive(Parser)]
#[command(
    name = "moniker",
    about = "Moniker: local wallet names with ENS placeholders",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, default_value = CONFIG_FILE_NAME)]
    pub config: String,
    /// Override the name service RPC endpoint
    #[arg(long, global = true)]
    pub rpc_url: Option<String>,
    /// Override the data directory
    #[arg(long, global = true)]
    pub data_dir: Option<String>,
    /// Skip ENS resolution
    #[arg(long, global = true)]
    pub no_resolve: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(flatten)]
    Wallet(WalletCommand),
    /// Serve reverse ENS lookups from a JSON file (local development)
    ServeNames {
        /// JSON object mapping 0x addresses to names
        #[arg(long)]
        names: String,
        /// Listen address
        #[arg(long, default_value = "127.0.0.1:9751")]
        addr: String,
    },
    /// Write a default configuration file
    Init {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        dir: String,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(url) = &self.rpc_url {
            config.resolver.rpc_url = url.clone();
        }
        if let Some(dir) = &self.data_dir {
            config.storage.data_dir = dir.clone();
        }
        if self.no_resolve {
            config.resolver.enabled = false;
        }
    }
}

pub async fn run(cli: Cli, config: AppConfig) -> Result<(), AppError> {
    match cli.command {
        Command::Wallet(command) => {
            let ctx = AppContext::from_config(&config)?;
            crate::wallet::run(&ctx, command).await
        }
        Command::ServeNames { names, addr } => {
            crate::tools::serve_names::run(std::path::Path::new(&names), &addr).await
        }
        Command::Init { dir } => {
            let path = AppConfig::init(&dir)?;
            print_success(&format!("Wrote {}", path.display()));
            Ok(())
        }
    }
}
