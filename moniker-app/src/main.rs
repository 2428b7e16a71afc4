use clap::Parser;
use tracing_subscriber::EnvFilter;

use moniker_app::cli;
use moniker_app::config::AppConfig;

fn main() {
    let cli = cli::Cli::parse();

    let mut config = match AppConfig::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);

    // RUST_LOG wins over the configured level. Logs go to stderr so that
    // --json output stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");
    rt.block_on(async {
        if let Err(e) = cli::run(cli, config).await {
            tracing::error!("Fatal error: {}", e);
            std::process::exit(1);
        }
    });
}
