//! Canned-page fetcher that records every request

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::fetch::PageFetcher;

pub const BASE: &str = "http://wordnet.test/wn/search";

const EMPTY_PAGE: &str = "<html><body><p>No results</p></body></html>";

enum Route {
    Page(String),
    Fail(u16),
}

#[derive(Default)]
pub struct FakeFetcher {
    routes: Vec<(String, Route)>,
    requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for any URL containing `pattern`
    pub fn page(mut self, pattern: &str, html: impl Into<String>) -> Self {
        self.routes.push((pattern.to_string(), Route::Page(html.into())));
        self
    }

    /// Fail any URL containing `pattern` with `status`
    pub fn failing(mut self, pattern: &str, status: u16) -> Self {
        self.routes.push((pattern.to_string(), Route::Fail(status)));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());

        match self.routes.iter().find(|(pattern, _)| url.contains(pattern)) {
            Some((_, Route::Page(html))) => Ok(html.clone()),
            Some((_, Route::Fail(status))) => Err(FetchError::Status {
                status: *status,
                url: url.to_string(),
            }),
            None => Ok(EMPTY_PAGE.to_string()),
        }
    }
}

/// A page of bold `pt|word` entries
pub fn bold_page(words: &[&str]) -> String {
    let entries: String = words.iter().map(|w| format!("<b>pt|{w}</b>")).collect();
    format!("<html><body><div>{entries}</div></body></html>")
}
