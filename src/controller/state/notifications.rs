//! Transient notifications
//!
//! Two independent channels: errors from the create call and the
//! "URL copied" confirmation. Showing one never touches the other.

use std::time::{Duration, Instant};

/// A visible notification and when it should disappear
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    shown_at: Instant,
    ttl: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
            ttl,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.ttl
    }
}

#[derive(Debug, Clone)]
pub struct Notifications {
    error: Option<Notification>,
    copied: Option<Notification>,
    error_ttl: Duration,
    copied_ttl: Duration,
}

impl Notifications {
    pub fn new(error_ttl: Duration, copied_ttl: Duration) -> Self {
        Self {
            error: None,
            copied: None,
            error_ttl,
            copied_ttl,
        }
    }

    /// Show (or replace) the error notification
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(Notification::new(message, self.error_ttl));
    }

    /// Show (or restart) the copied confirmation
    pub fn show_copied(&mut self, message: impl Into<String>) {
        self.copied = Some(Notification::new(message, self.copied_ttl));
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn dismiss_copied(&mut self) {
        self.copied = None;
    }

    /// Hide every notification whose time is up
    pub fn expire(&mut self, now: Instant) {
        if self.error.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.error = None;
        }
        if self.copied.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.copied = None;
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().map(|n| n.message.as_str())
    }

    pub fn copied(&self) -> Option<&str> {
        self.copied.as_ref().map(|n| n.message.as_str())
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(Duration::from_millis(5000), Duration::from_millis(1000))
    }
}
