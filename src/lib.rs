//! shortener-tui - terminal front-end for a URL-shortening service
//!
//! A form submits a long URL (and optional custom alias) to the backend; a
//! paginated list shows, copies, opens and deletes what was shortened.
//!
//! # Features
//! - **tui**: Terminal user interface (default)
//! - **cli**: Headless commands (default)
//!
//! # Architecture
//! - `client`: backend seam (`ShortenerApi`) and its HTTP implementation
//! - `controller`: form-and-list state, validation and transitions
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Execution modes
//! - `system`: Logging, panic hook, clipboard and browser

pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod system;
