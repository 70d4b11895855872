//! Client layer for the shortening backend
//!
//! The controller talks to the backend only through [`ShortenerApi`], so the
//! HTTP implementation can be swapped for an in-memory double in tests.
//!
//! # Endpoints
//!
//! ```text
//! GET    /urls             → 200 + [ShortenedUrl]
//! POST   /shorten          → 2xx (400 carries {"message": ...})
//! DELETE /{encoded alias}  → 2xx (usually 204)
//! ```

mod http;
mod models;

pub use http::HttpShortenerApi;
pub use models::{ErrorBody, ShortenRequest, ShortenedUrl};

use std::fmt;

use async_trait::async_trait;

// ============ ClientError ============

/// Errors from the client layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Connection refused, DNS failure, broken body stream, worker join failure
    Transport(String),
    /// Backend answered with a non-2xx status
    ///
    /// `message` is only populated for 400 responses whose JSON body carries one.
    Status { status: u16, message: Option<String> },
    /// Body could not be decoded as the expected JSON shape
    Decode(String),
}

impl ClientError {
    /// HTTP status, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ClientError::Status {
                status,
                message: Some(message),
            } => write!(f, "HTTP {}: {}", status, message),
            ClientError::Status {
                status,
                message: None,
            } => write!(f, "HTTP {}", status),
            ClientError::Decode(msg) => write!(f, "Invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

// ============ ShortenerApi ============

/// The three backend calls the front-end issues
#[async_trait]
pub trait ShortenerApi: Send + Sync {
    /// `GET /urls`
    async fn list_urls(&self) -> Result<Vec<ShortenedUrl>, ClientError>;

    /// `POST /shorten`; the created entry in the response is not needed by callers
    async fn shorten(&self, request: &ShortenRequest) -> Result<(), ClientError>;

    /// `DELETE /{alias}`; the alias is percent-encoded by the implementation
    async fn delete_alias(&self, alias: &str) -> Result<(), ClientError>;

    /// Name for logging
    fn name(&self) -> &'static str;
}
