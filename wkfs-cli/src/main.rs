//! WaniKani French Synonyms
//!
//! Fetches the community French datasets and stores them as meaning
//! synonyms on every unlocked WaniKani subject, within a per-run request
//! ceiling.
//!
//! Usage: `WANIKANI_API_TOKEN=... wkfs sync`

#![allow(clippy::print_stdout, reason = "stdout is the user interface of this CLI")]

use anyhow::Result;
use clap::Parser;

mod cli;
mod config_commands;
mod sync_commands;

use cli::{Cli, Commands, ConfigCommands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    wkfs_core::modules::logger::init_logging(&cli.log_level)?;

    match cli.command {
        None => sync_commands::run(cli::SyncArgs::default(), cli.token).await,
        Some(Commands::Sync(args)) => sync_commands::run(args, cli.token).await,
        Some(Commands::Datasets) => sync_commands::show_datasets().await,
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show { json } => config_commands::show_config(json, cli.token.as_deref()),
            ConfigCommands::Get { key } => config_commands::get_config_value(&key),
            ConfigCommands::Set { key, value } => config_commands::set_config_value(&key, &value),
        },
    }
}
