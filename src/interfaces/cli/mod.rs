//! CLI interface module
//!
//! Link commands run against the same services as the HTTP server, directly
//! on the configured database.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::GolinksError;
use crate::services::{AnalyticsService, LinkService};
use crate::storage::StorageFactory;
use commands::{add_link, config_generate, list_links, remove_link, show_stats, update_link};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    InputError(String),
    CommandError(String),
}

impl CliError {
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::InputError(msg) => format!("Invalid input: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::InputError(msg) => {
                format!("{} {}", "Invalid input:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<GolinksError> for CliError {
    fn from(err: GolinksError) -> Self {
        if err.is_storage() {
            CliError::StorageError(err.message().to_string())
        } else {
            CliError::InputError(err.message().to_string())
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::CommandError(err.to_string())
    }
}

/// Run a CLI command from clap-parsed input
///
/// `serve` is not handled here.
pub async fn run_cli_command(cmd: &Commands, config: &StaticConfig) -> Result<(), CliError> {
    if let Commands::Config { action } = cmd {
        return match action {
            ConfigCommands::Generate { output_path, force } => {
                config_generate(output_path.clone(), *force)
            }
        };
    }

    let storage = StorageFactory::create(&config.database).await?;
    let links = LinkService::new(storage.clone());

    match cmd {
        Commands::Add {
            shortlink,
            destination,
        } => add_link(&links, shortlink, destination).await,
        Commands::List { filter } => list_links(&links, filter.clone()).await,
        Commands::Update {
            id,
            shortlink,
            destination,
        } => update_link(&links, *id, shortlink, destination).await,
        Commands::Remove { id } => remove_link(&links, *id).await,
        Commands::Stats { shortlink } => {
            show_stats(&AnalyticsService::new(Arc::clone(&storage)), shortlink.as_deref()).await
        }
        Commands::Serve | Commands::Config { .. } => Err(CliError::CommandError(
            "not a CLI command".to_string(),
        )),
    }
}
