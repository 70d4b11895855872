use clap::Parser;
use colored::Colorize;
use tracing::debug;

use shortener_tui::cli::Cli;
use shortener_tui::config::{get_config, init_config};
use shortener_tui::runtime::modes::{self, Mode};
use shortener_tui::system::RunMode;
use shortener_tui::system::logging::init_logging;
use shortener_tui::system::panic_handler::install_panic_hook;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_config(cli.config.as_deref());
    let config = get_config();

    let mode = modes::detect_mode(cli.command.as_ref());
    let run_mode = match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => RunMode::Tui,
        _ => RunMode::Cli,
    };

    install_panic_hook(run_mode);
    let _guard = init_logging(&config.logging, run_mode)?;
    debug!("Running in {:?} mode", mode);

    match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => modes::run_tui(&config, cli.base_url.as_deref()).await,

        #[cfg(feature = "cli")]
        Mode::Cli => {
            let Some(command) = cli.command else {
                anyhow::bail!("No command given");
            };
            if let Err(e) = modes::run_cli(command, &config, cli.base_url.as_deref()).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }

        Mode::Unknown => {
            eprintln!(
                "{}",
                "No interface enabled, rebuild with the `tui` or `cli` feature".red()
            );
            std::process::exit(1);
        }
    }
}
