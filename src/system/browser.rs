//! Browser seam for the "open in new tab" action

use tracing::debug;

use crate::errors::ShortenerError;

/// Browsing-context target for opened links
pub const OPEN_TARGET: &str = "_blank";
/// Window features for opened links: no opener handle, no referrer
pub const OPEN_FEATURES: &str = "noopener,noreferrer";

/// Opens a URL in a new browsing context
pub trait LinkOpener: Send {
    fn open(&self, url: &str, target: &str, features: &str) -> Result<(), ShortenerError>;
}

/// Launches the user's default browser
///
/// A browser started from outside has neither an opener nor a referrer, so
/// `target` and `features` are satisfied by construction.
#[cfg(feature = "tui")]
#[derive(Debug, Default)]
pub struct SystemBrowser;

#[cfg(feature = "tui")]
impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str, target: &str, features: &str) -> Result<(), ShortenerError> {
        debug!("Opening {} (target={}, features={})", url, target, features);
        open::that_detached(url).map_err(|e| ShortenerError::browser(e.to_string()))
    }
}

/// Opener used when no browser integration is compiled in
#[derive(Debug, Default)]
pub struct UnavailableBrowser;

impl LinkOpener for UnavailableBrowser {
    fn open(&self, url: &str, _target: &str, _features: &str) -> Result<(), ShortenerError> {
        debug!("Browser integration unavailable, not opening {}", url);
        Err(ShortenerError::browser("browser support is not available"))
    }
}
