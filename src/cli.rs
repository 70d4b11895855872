//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for shortener-tui using clap's derive macros.

use clap::{Parser, Subcommand};

/// shortener-tui - terminal front-end for a URL-shortening service
#[derive(Parser, Debug)]
#[command(name = "shortener-tui")]
#[command(version)]
#[command(about = "Terminal front-end for a URL-shortening service", long_about = None)]
pub struct Cli {
    /// Configuration file (default: shortener.toml when present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Backend origin, overrides api.base_url
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start TUI mode (default)
    #[cfg(feature = "tui")]
    Tui,

    /// List all shortened URLs
    List,

    /// Shorten a URL
    ///
    /// The URL and alias are validated locally with the same rules as the form.
    Shorten {
        /// Absolute URL to shorten
        url: String,

        /// Custom alias (letters, numbers, hyphens, underscores)
        #[arg(long, short = 'a')]
        alias: Option<String>,
    },

    /// Delete a shortened URL by alias
    Delete {
        /// Alias to delete
        alias: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: shortener.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
