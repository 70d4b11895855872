//! Clipboard seam
//!
//! The controller only needs "write this text"; the arboard-backed
//! implementation is compiled with the `tui` feature.

use crate::errors::ShortenerError;

/// System clipboard writer
pub trait Clipboard: Send {
    fn set_text(&mut self, text: &str) -> Result<(), ShortenerError>;
}

/// Clipboard backed by arboard
///
/// A fresh handle is opened per write; some platforms drop the selection
/// when a long-lived handle goes stale.
#[cfg(feature = "tui")]
#[derive(Debug, Default)]
pub struct SystemClipboard;

#[cfg(feature = "tui")]
impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ShortenerError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ShortenerError::clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ShortenerError::clipboard(e.to_string()))
    }
}

/// Clipboard used when no desktop clipboard is compiled in
#[derive(Debug, Default)]
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ShortenerError> {
        Err(ShortenerError::clipboard("clipboard support is not available"))
    }
}
