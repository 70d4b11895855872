//! Row actions that never touch the network

use tracing::{debug, warn};

use super::Controller;
use super::constants::URL_COPIED;
use crate::system::browser::{OPEN_FEATURES, OPEN_TARGET};

impl Controller {
    /// Copy `short_url` to the clipboard and confirm on the copied channel
    pub fn copy_short_url(&mut self, short_url: &str) -> bool {
        match self.clipboard.set_text(short_url) {
            Ok(()) => {
                debug!("Copied {}", short_url);
                self.notifications.show_copied(URL_COPIED);
                true
            }
            Err(e) => {
                warn!("Failed to copy {}: {}", short_url, e);
                false
            }
        }
    }

    /// Open `short_url` in a new browsing context
    pub fn open_short_url(&self, short_url: &str) -> bool {
        match self.opener.open(short_url, OPEN_TARGET, OPEN_FEATURES) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to open {}: {}", short_url, e);
                false
            }
        }
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.pagination.set_rows_per_page(rows_per_page);
    }

    pub fn cycle_rows_per_page(&mut self, forward: bool) {
        self.pagination.cycle_rows_per_page(forward);
    }

    pub fn next_page(&mut self) -> bool {
        self.pagination.next_page(self.urls.len())
    }

    pub fn prev_page(&mut self) -> bool {
        self.pagination.prev_page()
    }
}
