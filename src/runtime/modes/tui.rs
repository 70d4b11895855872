//! TUI mode
//!
//! Wires the controller to the real clipboard and browser, then hands over
//! to the terminal UI.

use std::time::Duration;

use crate::config::StaticConfig;
use crate::controller::Controller;
use crate::runtime::startup::prepare_api;
use crate::system::browser::SystemBrowser;
use crate::system::clipboard::SystemClipboard;

/// Run TUI mode
pub async fn run_tui(config: &StaticConfig, base_url: Option<&str>) -> anyhow::Result<()> {
    let api = prepare_api(&config.api, base_url)?;
    let controller = Controller::new(api, &config.ui)
        .with_clipboard(Box::new(SystemClipboard))
        .with_opener(Box::new(SystemBrowser));

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    crate::interfaces::tui::run_tui(controller, tick_rate).await?;
    Ok(())
}
