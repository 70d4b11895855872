//! List shortened URLs command

use colored::Colorize;
use std::sync::Arc;

use crate::client::ShortenerApi;
use crate::config::UiConfig;
use crate::controller::Controller;
use crate::controller::constants::EMPTY_LIST;
use crate::interfaces::cli::CliError;

pub async fn list_urls(api: Arc<dyn ShortenerApi>, ui: &UiConfig) -> Result<(), CliError> {
    let mut controller = Controller::new(api, ui);
    controller.mount().await;

    if let Some(error) = controller.load_error() {
        return Err(CliError::ClientError(error.to_string()));
    }

    let urls = controller.urls();
    if urls.is_empty() {
        println!("{} {}", "ℹ".bold().blue(), EMPTY_LIST);
    } else {
        println!("{}", "Shortened URLs:".bold().green());
        println!();
        for url in urls {
            println!(
                "  {} {} -> {}",
                url.alias.cyan(),
                url.short_url.blue().underline(),
                url.full_url.dimmed()
            );
        }
        println!();
        println!(
            "{} Total {} shortened URLs",
            "ℹ".bold().blue(),
            urls.len().to_string().green()
        );
    }
    Ok(())
}
