//! Application runtime
//!
//! - `startup`: builds the backend client from configuration
//! - `modes`: entry points for the TUI and CLI modes

pub mod modes;
pub mod startup;
