// ABOUTME: Entry point for the jobboard command-line tool
// ABOUTME: Loads configuration, sets up logging, and dispatches the subcommand

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jobboard::config::Config;

mod commands;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = commands::Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    commands::run(cli.command, &config).await
}
