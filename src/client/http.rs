//! HTTP implementation of [`ShortenerApi`] on top of ureq
//!
//! ureq is blocking, so every call runs inside `spawn_blocking`; the caller
//! only sees an awaited future.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace, warn};
use ureq::Agent;
use url::Url;

use super::models::{ErrorBody, ShortenRequest, ShortenedUrl};
use super::{ClientError, ShortenerApi};
use crate::errors::ShortenerError;

/// Backend client addressed by a fixed base origin
#[derive(Clone)]
pub struct HttpShortenerApi {
    base_url: String,
    agent: Agent,
}

impl HttpShortenerApi {
    /// Create a client for `base_url`
    ///
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ShortenerError> {
        let parsed = Url::parse(base_url).map_err(|e| {
            ShortenerError::config(format!("Invalid backend base URL '{}': {}", base_url, e))
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ShortenerError::config(format!(
                "Backend base URL '{}' cannot carry paths",
                base_url
            )));
        }

        // 非 2xx 状态码按普通响应返回，由调用方区分 400 与其它错误
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .into();

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn list_endpoint(&self) -> String {
        format!("{}/urls", self.base_url)
    }

    pub(crate) fn shorten_endpoint(&self) -> String {
        format!("{}/shorten", self.base_url)
    }

    pub(crate) fn delete_endpoint(&self, alias: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(alias))
    }

    fn list_sync(agent: Agent, url: String) -> Result<Vec<ShortenedUrl>, ClientError> {
        let resp = agent
            .get(&url)
            .call()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: None,
            });
        }

        resp.into_body()
            .read_json::<Vec<ShortenedUrl>>()
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    fn shorten_sync(agent: Agent, url: String, request: ShortenRequest) -> Result<(), ClientError> {
        let resp = agent
            .post(&url)
            .send_json(&request)
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        // 只有 400 的响应体携带面向用户的 message
        let message = if status.as_u16() == 400 {
            let raw = resp.into_body().read_to_string().unwrap_or_default();
            match serde_json::from_str::<ErrorBody>(&raw) {
                Ok(body) => body.message,
                Err(e) => {
                    trace!("400 body from {} is not JSON: {}", url, e);
                    None
                }
            }
        } else {
            None
        };

        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }

    fn delete_sync(agent: Agent, url: String) -> Result<(), ClientError> {
        let resp = agent
            .delete(&url)
            .call()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::Status {
                status: status.as_u16(),
                message: None,
            })
        }
    }
}

/// Run a blocking request on the blocking pool
async fn run_blocking<T, F>(f: F) -> Result<T, ClientError>
where
    F: FnOnce() -> Result<T, ClientError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap_or_else(|e| {
        warn!("HTTP worker task failed: {}", e);
        Err(ClientError::Transport(e.to_string()))
    })
}

#[async_trait]
impl ShortenerApi for HttpShortenerApi {
    async fn list_urls(&self) -> Result<Vec<ShortenedUrl>, ClientError> {
        let url = self.list_endpoint();
        debug!("GET {}", url);
        let agent = self.agent.clone();
        run_blocking(move || Self::list_sync(agent, url)).await
    }

    async fn shorten(&self, request: &ShortenRequest) -> Result<(), ClientError> {
        let url = self.shorten_endpoint();
        debug!(
            "POST {} (custom alias: {})",
            url,
            request.custom_alias.is_some()
        );
        let agent = self.agent.clone();
        let request = request.clone();
        run_blocking(move || Self::shorten_sync(agent, url, request)).await
    }

    async fn delete_alias(&self, alias: &str) -> Result<(), ClientError> {
        let url = self.delete_endpoint(alias);
        debug!("DELETE {}", url);
        let agent = self.agent.clone();
        run_blocking(move || Self::delete_sync(agent, url)).await
    }

    fn name(&self) -> &'static str {
        "HTTP"
    }
}
