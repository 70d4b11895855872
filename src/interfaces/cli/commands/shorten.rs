//! Shorten URL command

use colored::Colorize;
use std::sync::Arc;
use tracing::warn;

use crate::client::ShortenerApi;
use crate::config::UiConfig;
use crate::controller::Controller;
use crate::errors::ShortenerError;
use crate::interfaces::cli::CliError;

/// Validate with the form rules, then create
///
/// The list is loaded first so a duplicate alias is caught locally; if that
/// load fails the backend still has the final word.
pub async fn shorten_url(
    api: Arc<dyn ShortenerApi>,
    ui: &UiConfig,
    url: String,
    alias: Option<String>,
) -> Result<(), CliError> {
    let mut controller = Controller::new(api, ui);
    controller.mount().await;
    if let Some(error) = controller.load_error() {
        warn!("Duplicate alias check skipped: {}", error);
    }

    controller.set_url(url.clone());
    controller.blur_url();
    controller.set_alias(alias.clone().unwrap_or_default());
    controller.blur_alias();

    let form = controller.form();
    if let Some(error) = form.url_error.as_deref().or(form.alias_error.as_deref()) {
        return Err(ShortenerError::validation(error).into());
    }
    if !controller.is_ready_for_submit() {
        return Err(
            ShortenerError::validation("URL and alias are not ready for submission").into(),
        );
    }

    let action = controller.submit().await;
    if let Some(error) = controller.error_notification() {
        return Err(CliError::ClientError(error.to_string()));
    }
    controller.dispatch(action).await;

    let created = alias
        .as_deref()
        .filter(|a| !a.is_empty())
        .and_then(|a| controller.urls().iter().find(|u| u.alias == a))
        .or_else(|| controller.urls().iter().rev().find(|u| u.full_url == url));

    match created {
        Some(entry) => println!(
            "{} Shortened: {} -> {}",
            "✓".bold().green(),
            entry.short_url.cyan(),
            entry.full_url.blue().underline()
        ),
        None => println!("{} Shortened: {}", "✓".bold().green(), url.blue().underline()),
    }
    Ok(())
}
