//! Delete URL command

use colored::Colorize;
use std::sync::Arc;

use crate::client::ShortenerApi;
use crate::interfaces::cli::CliError;

/// Unlike the TUI, a failed delete is reported to the caller
pub async fn delete_url(api: Arc<dyn ShortenerApi>, alias: String) -> Result<(), CliError> {
    api.delete_alias(&alias)
        .await
        .map_err(|e| CliError::ClientError(format!("Failed to delete {}: {}", alias, e)))?;

    println!(
        "{} Deleted shortened URL: {}",
        "✓".bold().green(),
        alias.cyan()
    );
    Ok(())
}
