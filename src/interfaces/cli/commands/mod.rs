//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod config_gen;
mod delete;
mod list;
mod shorten;

pub use config_gen::config_generate;
pub use delete::delete_url;
pub use list::list_urls;
pub use shorten::shorten_url;
