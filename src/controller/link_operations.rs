//! Fetch controller: list, create and delete against the backend

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::Controller;
use super::action::Action;
use super::constants::{LOAD_FAILED, REQUEST_REJECTED, SAVE_FAILED};
use crate::client::{ClientError, ShortenRequest};

impl Controller {
    /// Initial load; the list is fetched once here and otherwise only after mutations
    pub async fn mount(&mut self) {
        self.list_urls().await;
    }

    /// `GET /urls`, replacing the list wholesale on success
    pub async fn list_urls(&mut self) {
        let api = Arc::clone(&self.api);
        match api.list_urls().await {
            Ok(urls) => {
                debug!("Loaded {} urls from {}", urls.len(), api.name());
                self.urls = urls;
                self.load_error = None;
                self.pagination.clamp(self.urls.len());
            }
            Err(e) => {
                warn!("Failed to load urls: {}", e);
                self.load_error = Some(LOAD_FAILED.to_string());
            }
        }
    }

    /// Submit the form if it is ready; otherwise a no-op
    pub async fn submit(&mut self) -> Action {
        if !self.is_ready_for_submit() {
            debug!("Submit ignored, form not ready");
            return Action::Noop;
        }
        self.shorten().await
    }

    /// `POST /shorten` with the current draft
    ///
    /// 成功时清空表单并请求刷新；失败时保留表单，只显示错误通知
    pub async fn shorten(&mut self) -> Action {
        let request = ShortenRequest::new(self.form.url.clone(), &self.form.alias);
        let api = Arc::clone(&self.api);

        match api.shorten(&request).await {
            Ok(()) => {
                info!(
                    "Shortened {} (alias: {})",
                    request.full_url,
                    request.custom_alias.as_deref().unwrap_or("<random>")
                );
                self.form.clear();
                Action::RefreshUrls
            }
            Err(e) => {
                warn!("Failed to shorten {}: {}", request.full_url, e);
                self.notifications.show_error(create_error_message(&e));
                Action::Noop
            }
        }
    }

    /// `DELETE /{alias}`; failures are logged and otherwise silent
    pub async fn delete_alias(&mut self, alias: &str) -> Action {
        let api = Arc::clone(&self.api);
        match api.delete_alias(alias).await {
            Ok(()) => {
                info!("Deleted alias {}", alias);
                Action::RefreshUrls
            }
            Err(e) => {
                warn!("Failed to delete alias {}: {}", alias, e);
                Action::Noop
            }
        }
    }
}

/// Message shown for a failed create call
pub fn create_error_message(err: &ClientError) -> String {
    match err {
        ClientError::Status {
            status: 400,
            message: Some(message),
        } if !message.trim().is_empty() => message.clone(),
        ClientError::Status { status: 400, .. } => REQUEST_REJECTED.to_string(),
        _ => SAVE_FAILED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_error_message_uses_backend_message() {
        let err = ClientError::Status {
            status: 400,
            message: Some("Alias is reserved".into()),
        };
        assert_eq!(create_error_message(&err), "Alias is reserved");
    }

    #[test]
    fn test_create_error_message_400_fallback() {
        let missing = ClientError::Status {
            status: 400,
            message: None,
        };
        let blank = ClientError::Status {
            status: 400,
            message: Some("  ".into()),
        };
        assert_eq!(create_error_message(&missing), REQUEST_REJECTED);
        assert_eq!(create_error_message(&blank), REQUEST_REJECTED);
    }

    #[test]
    fn test_create_error_message_generic() {
        let server = ClientError::Status {
            status: 500,
            message: None,
        };
        let transport = ClientError::Transport("connection refused".into());
        let decode = ClientError::Decode("eof".into());
        assert_eq!(create_error_message(&server), SAVE_FAILED);
        assert_eq!(create_error_message(&transport), SAVE_FAILED);
        assert_eq!(create_error_message(&decode), SAVE_FAILED);
    }
}
