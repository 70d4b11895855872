//! CLI mode
//!
//! This module contains the CLI mode startup logic.
//! It delegates to the actual CLI implementation.

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::interfaces::cli::{CliError, commands, run_cli_command};
use crate::runtime::startup::prepare_api;

/// Run CLI mode
pub async fn run_cli(
    command: Commands,
    config: &StaticConfig,
    base_url: Option<&str>,
) -> Result<(), CliError> {
    // config generate 不需要后端
    if let Commands::Config {
        action: ConfigCommands::Generate { output_path, force },
    } = command
    {
        return commands::config_generate(output_path, force).await;
    }

    let api = prepare_api(&config.api, base_url)
        .map_err(|e| CliError::CommandError(format!("{:#}", e)))?;
    run_cli_command(command, api, &config.ui).await
}
