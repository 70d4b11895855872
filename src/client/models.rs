//! Wire models shared with the backend

use serde::{Deserialize, Serialize};

/// One shortened URL as returned by `GET /urls`
///
/// `alias` is the identity key of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenedUrl {
    pub alias: String,
    pub full_url: String,
    pub short_url: String,
}

/// Body of `POST /shorten`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub full_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_alias: Option<String>,
}

impl ShortenRequest {
    /// Build a request from raw form values; a blank alias is left out entirely
    pub fn new(full_url: impl Into<String>, alias: &str) -> Self {
        Self {
            full_url: full_url.into(),
            custom_alias: if alias.is_empty() {
                None
            } else {
                Some(alias.to_string())
            },
        }
    }
}

/// Error body the backend sends with 400 responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
