//! Input validation logic
//!
//! 字段错误只在 touched 之后计算；提交可用性每次现算，不缓存

use url::Url;

use super::Controller;
use super::constants::{DUPLICATE_ALIAS, INVALID_ALIAS, INVALID_URL};
use crate::client::ShortenedUrl;

/// Whether `value` parses as an absolute URL
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// Error for the URL field, `None` when valid
pub fn url_error(value: &str) -> Option<String> {
    if is_valid_url(value) {
        None
    } else {
        Some(INVALID_URL.to_string())
    }
}

/// `^[a-zA-Z0-9_-]+$`
pub fn is_valid_alias_syntax(alias: &str) -> bool {
    !alias.is_empty()
        && alias
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
}

/// Error for the alias field against the current list; an empty alias is always fine
pub fn alias_error(alias: &str, urls: &[ShortenedUrl]) -> Option<String> {
    if alias.is_empty() {
        return None;
    }
    if !is_valid_alias_syntax(alias) {
        return Some(INVALID_ALIAS.to_string());
    }
    if urls.iter().any(|u| u.alias == alias) {
        return Some(DUPLICATE_ALIAS.to_string());
    }
    None
}

impl Controller {
    pub fn set_url(&mut self, value: impl Into<String>) {
        self.form.url = value.into();
        if self.form.url_touched {
            self.form.url_error = url_error(&self.form.url);
        }
    }

    pub fn blur_url(&mut self) {
        self.form.url_touched = true;
        self.form.url_error = url_error(&self.form.url);
    }

    pub fn set_alias(&mut self, value: impl Into<String>) {
        self.form.alias = value.into();
        if self.form.alias_touched {
            self.form.alias_error = alias_error(&self.form.alias, &self.urls);
        }
    }

    pub fn blur_alias(&mut self) {
        self.form.alias_touched = true;
        self.form.alias_error = alias_error(&self.form.alias, &self.urls);
    }

    /// Gate for the shorten button
    pub fn is_ready_for_submit(&self) -> bool {
        let form = &self.form;
        if form.url.is_empty() || !is_valid_url(&form.url) {
            return false;
        }
        form.alias.is_empty() || (form.alias_touched && form.alias_error.is_none())
    }
}
