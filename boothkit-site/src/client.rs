//! HTTP client for the content API
//!
//! Fetches the remote content document from `{base}/api/content`. Every
//! request carries no-store cache headers so editors see their changes
//! immediately instead of a stale CDN copy.
//!
//! [`ContentClient::fetch_document`] is the never-fails boundary the rest
//! of the crate builds on: any failure is logged and collapses to an empty
//! document, which resolves to pure defaults downstream.

use boothkit_common::ContentDocument;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Path of the content endpoint, appended to the configured base URL.
pub const CONTENT_ENDPOINT: &str = "/api/content";

/// Why a content fetch failed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Request never produced an HTTP response (DNS, refused, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Body was not a JSON object.
    #[error("malformed content document: {0}")]
    Malformed(String),
}

/// Client for the content API
///
/// # Panics
/// Construction panics if the HTTP client cannot be built (should not
/// happen with valid config).
#[derive(Debug, Clone)]
pub struct ContentClient {
    /// HTTP client with no-store cache headers
    client: Client,
    /// Base URL without trailing slash
    base_url: String,
}

impl ContentClient {
    /// Create a client with no request timeout.
    ///
    /// Matches browser fetch semantics: a slow origin is waited out
    /// rather than cut off. Use [`with_timeout`](Self::with_timeout)
    /// for tools that must terminate.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .default_headers(no_store_headers())
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Create a client that aborts requests after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .default_headers(no_store_headers())
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the content endpoint.
    pub fn content_url(&self) -> String {
        format!("{}{}", self.base_url, CONTENT_ENDPOINT)
    }

    /// Fetch and parse the content document, reporting every failure.
    pub async fn try_fetch_document(&self) -> Result<ContentDocument, FetchError> {
        let url = self.content_url();
        debug!(url = %url, "fetching content document");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let document =
            ContentDocument::parse(&body).map_err(|e| FetchError::Malformed(e.to_string()))?;

        debug!(sections = document.len(), "content document fetched");
        Ok(document)
    }

    /// Fetch the content document, collapsing any failure to an empty one.
    ///
    /// The failure is logged at warn level. Resolving an empty document
    /// yields the compiled defaults, so callers always have something to
    /// render.
    pub async fn fetch_document(&self) -> ContentDocument {
        match self.try_fetch_document().await {
            Ok(document) => document,
            Err(e) => {
                warn!(url = %self.content_url(), error = %e, "content fetch failed, using defaults");
                ContentDocument::default()
            }
        }
    }
}

fn no_store_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers
}
