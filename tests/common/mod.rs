//! Test doubles shared by the integration tests
//!
//! `MockApi` behaves like a tiny in-memory backend: creates append, deletes
//! remove, and every call is recorded. Failures are switched on per endpoint.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use shortener_tui::client::{ClientError, ShortenRequest, ShortenedUrl, ShortenerApi};
use shortener_tui::config::UiConfig;
use shortener_tui::controller::Controller;
use shortener_tui::errors::ShortenerError;
use shortener_tui::system::{Clipboard, LinkOpener};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Shorten(ShortenRequest),
    Delete(String),
}

#[derive(Default)]
struct MockState {
    urls: Vec<ShortenedUrl>,
    calls: Vec<Call>,
    list_error: Option<ClientError>,
    shorten_error: Option<ClientError>,
    delete_error: Option<ClientError>,
}

#[derive(Clone, Default)]
pub struct MockApi {
    state: Arc<Mutex<MockState>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_urls(urls: Vec<ShortenedUrl>) -> Self {
        let api = Self::new();
        api.state.lock().unwrap().urls = urls;
        api
    }

    pub fn fail_list(&self, err: Option<ClientError>) {
        self.state.lock().unwrap().list_error = err;
    }

    pub fn fail_shorten(&self, err: Option<ClientError>) {
        self.state.lock().unwrap().shorten_error = err;
    }

    pub fn fail_delete(&self, err: Option<ClientError>) {
        self.state.lock().unwrap().delete_error = err;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls().iter().filter(|c| **c == Call::List).count()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    pub fn stored(&self) -> Vec<ShortenedUrl> {
        self.state.lock().unwrap().urls.clone()
    }
}

#[async_trait]
impl ShortenerApi for MockApi {
    async fn list_urls(&self) -> Result<Vec<ShortenedUrl>, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::List);
        match &state.list_error {
            Some(err) => Err(err.clone()),
            None => Ok(state.urls.clone()),
        }
    }

    async fn shorten(&self, request: &ShortenRequest) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Shorten(request.clone()));
        if let Some(err) = &state.shorten_error {
            return Err(err.clone());
        }
        let alias = request
            .custom_alias
            .clone()
            .unwrap_or_else(|| format!("gen{}", state.urls.len()));
        state.urls.push(entry(&alias, &request.full_url));
        Ok(())
    }

    async fn delete_alias(&self, alias: &str) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Delete(alias.to_string()));
        if let Some(err) = &state.delete_error {
            return Err(err.clone());
        }
        state.urls.retain(|u| u.alias != alias);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Clipboard that remembers what was written
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    pub writes: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ShortenerError> {
        if self.fail {
            return Err(ShortenerError::clipboard("no display"));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Opener that remembers (url, target, features)
#[derive(Clone, Default)]
pub struct RecordingOpener {
    pub opened: Arc<Mutex<Vec<(String, String, String)>>>,
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str, target: &str, features: &str) -> Result<(), ShortenerError> {
        self.opened
            .lock()
            .unwrap()
            .push((url.to_string(), target.to_string(), features.to_string()));
        Ok(())
    }
}

pub fn entry(alias: &str, full_url: &str) -> ShortenedUrl {
    ShortenedUrl {
        alias: alias.to_string(),
        full_url: full_url.to_string(),
        short_url: format!("http://sho.rt/{}", alias),
    }
}

pub fn numbered_entries(n: usize) -> Vec<ShortenedUrl> {
    (0..n)
        .map(|i| entry(&format!("a{}", i), &format!("https://example.com/{}", i)))
        .collect()
}

/// Controller over `api` with recording clipboard and opener
pub fn controller_with(
    api: &MockApi,
) -> (Controller, RecordingClipboard, RecordingOpener) {
    let clipboard = RecordingClipboard::default();
    let opener = RecordingOpener::default();
    let controller = Controller::new(Arc::new(api.clone()), &UiConfig::default())
        .with_clipboard(Box::new(clipboard.clone()))
        .with_opener(Box::new(opener.clone()));
    (controller, clipboard, opener)
}
