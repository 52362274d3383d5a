// ABOUTME: Command-line interface definition and dispatch
// ABOUTME: Wires config and the REST client into the list, post and browse commands

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;

use jobboard::board::ActiveTab;
use jobboard::config::Config;
use jobboard::remote::ApiClient;

mod browse;
mod list;
mod post;

#[derive(Parser, Debug)]
#[command(name = "jobboard")]
#[command(version)]
#[command(about = "Browse, filter and post jobs on a job board REST endpoint")]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./jobboard.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Jobs endpoint URL, overrides config and environment
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch jobs, apply filters and print the board
    List(list::ListArgs),

    /// Create a new job posting
    Post(post::PostArgs),

    /// Interactive board: filters, card selection, tabs and search
    Browse,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabArg {
    Recommended,
    Applied,
    Saved,
}

impl From<TabArg> for ActiveTab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Recommended => ActiveTab::Recommended,
            TabArg::Applied => ActiveTab::Applied,
            TabArg::Saved => ActiveTab::Saved,
        }
    }
}

pub async fn run(command: Commands, config: &Config) -> Result<()> {
    let client = ApiClient::with_timeout(config.api_url.clone(), config.timeout())?;
    tracing::debug!(endpoint = client.endpoint(), "using jobs endpoint");

    match command {
        Commands::List(args) => list::run(&client, args).await,
        Commands::Post(args) => post::run(&client, args).await,
        Commands::Browse => browse::run(&client).await,
    }
}

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
