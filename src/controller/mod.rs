//! Form-and-List Controller
//!
//! Owns every piece of client state: the form draft, the list fetched from the
//! backend, the persistent load error, pagination and the two notification
//! channels. All changes go through named transitions; rendering only reads.
//!
//! 拆分为多个子模块：
//! - `validation`: 字段校验与提交可用性
//! - `link_operations`: 列表加载、创建、删除
//! - `list_actions`: 复制、打开、分页
//! - `action`: 变更后的后续动作（刷新列表）

pub mod action;
pub mod constants;
mod link_operations;
mod list_actions;
pub mod state;
pub mod validation;

pub use action::Action;
pub use link_operations::create_error_message;
pub use state::{FormDraft, FormField, Notifications, Pagination};

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::client::{ShortenedUrl, ShortenerApi};
use crate::config::UiConfig;
use crate::system::browser::{LinkOpener, UnavailableBrowser};
use crate::system::clipboard::{Clipboard, UnavailableClipboard};

pub struct Controller {
    pub(crate) api: Arc<dyn ShortenerApi>,
    pub(crate) clipboard: Box<dyn Clipboard>,
    pub(crate) opener: Box<dyn LinkOpener>,

    pub(crate) urls: Vec<ShortenedUrl>,
    pub(crate) load_error: Option<String>,
    pub(crate) form: FormDraft,
    pub(crate) pagination: Pagination,
    pub(crate) notifications: Notifications,
}

impl Controller {
    /// Controller without clipboard or browser integration
    pub fn new(api: Arc<dyn ShortenerApi>, ui: &UiConfig) -> Self {
        Self {
            api,
            clipboard: Box::new(UnavailableClipboard),
            opener: Box::new(UnavailableBrowser),
            urls: Vec::new(),
            load_error: None,
            form: FormDraft::new(),
            pagination: Pagination::new(ui.rows_per_page, ui.rows_per_page_options.clone()),
            notifications: Notifications::new(
                Duration::from_millis(ui.error_notification_ms),
                Duration::from_millis(ui.copy_notification_ms),
            ),
        }
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn with_opener(mut self, opener: Box<dyn LinkOpener>) -> Self {
        self.opener = opener;
        self
    }

    /// Run a follow-up action until nothing is left to do
    pub async fn dispatch(&mut self, action: Action) {
        let mut next = action;
        while !next.is_noop() {
            next = match next {
                Action::RefreshUrls => {
                    self.list_urls().await;
                    Action::Noop
                }
                Action::Noop => Action::Noop,
            };
        }
    }

    /// Advance time: hide notifications whose TTL ran out
    pub fn tick(&mut self, now: Instant) {
        self.notifications.expire(now);
    }

    pub fn dismiss_error(&mut self) {
        self.notifications.dismiss_error();
    }

    pub fn dismiss_copied(&mut self) {
        self.notifications.dismiss_copied();
    }

    // ---- read-only views ----

    pub fn urls(&self) -> &[ShortenedUrl] {
        &self.urls
    }

    /// Rows on the current page
    pub fn visible_urls(&self) -> &[ShortenedUrl] {
        &self.urls[self.pagination.range(self.urls.len())]
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn form(&self) -> &FormDraft {
        &self.form
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.urls.len())
    }

    pub fn error_notification(&self) -> Option<&str> {
        self.notifications.error()
    }

    pub fn copied_notification(&self) -> Option<&str> {
        self.notifications.copied()
    }

    pub fn api_name(&self) -> &'static str {
        self.api.name()
    }
}
