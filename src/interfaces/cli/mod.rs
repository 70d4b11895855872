//! CLI interface module
//!
//! Headless commands that drive the same controller as the TUI.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use crate::cli::{Commands, ConfigCommands};
use crate::client::{ClientError, ShortenerApi};
use crate::config::UiConfig;
use crate::errors::ShortenerError;
use commands::{config_generate, delete_url, list_urls, shorten_url};

#[derive(Debug)]
pub enum CliError {
    ClientError(String),
    ValidationError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ClientError(msg) => format!("Request failed: {}", msg),
            CliError::ValidationError(msg) => format!("Invalid input: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ClientError(msg) => {
                format!("{} {}", "Request failed:".red().bold(), msg.white())
            }
            CliError::ValidationError(msg) => {
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

impl From<ShortenerError> for CliError {
    fn from(err: ShortenerError) -> Self {
        match err {
            ShortenerError::Validation(msg) => CliError::ValidationError(msg),
            other => CliError::CommandError(other.to_string()),
        }
    }
}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        CliError::ClientError(err.to_string())
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(
    cmd: Commands,
    api: Arc<dyn ShortenerApi>,
    ui: &UiConfig,
) -> Result<(), CliError> {
    match cmd {
        Commands::List => list_urls(api, ui).await,

        Commands::Shorten { url, alias } => shorten_url(api, ui, url, alias).await,

        Commands::Delete { alias } => delete_url(api, alias).await,

        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force).await,

        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "TUI is started by the runtime, not the CLI".to_string(),
        )),
    }
}
