//! User interfaces
//!
//! - `tui`: interactive terminal front-end
//! - `cli`: headless commands for scripting

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;
