//! System-level modules
//!
//! - Logging initialization
//! - Panic hook (terminal restore + crash log)
//! - Desktop integration seams (clipboard, browser)

pub mod browser;
pub mod clipboard;
pub mod logging;
pub mod panic_handler;

pub use browser::LinkOpener;
pub use clipboard::Clipboard;

/// Running mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Cli,
    Tui,
}
