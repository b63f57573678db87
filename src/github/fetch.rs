// src/github/fetch.rs
// =============================================================================
// The lowest layer: one HTTP GET that returns parsed JSON.
//
// Strategy:
// - All requests go through the `JsonSource` trait so the paging and
//   enrichment logic can be tested against an in-memory fake
// - `HttpSource` is the real implementation on top of a shared reqwest Client
// - We deliberately do NOT fail on non-2xx statuses here. GitHub answers
//   errors with a JSON body like {"message": "Not Found"}, and the caller
//   knows better what that means for its own request
//
// No retries. A transport or JSON error is returned to the caller as-is.
// =============================================================================

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Anything that can turn a URL into a JSON document.
#[async_trait]
pub trait JsonSource: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value>;
}

/// `JsonSource` backed by the GitHub REST API.
///
/// Cheap to share: reqwest's Client is a handle to a connection pool.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Builds a client that sends the headers GitHub expects on every request.
    ///
    /// With `timeout` set to `None` a request waits as long as the server takes.
    pub fn new(token: Option<&str>, timeout: Option<Duration>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("contributors-table/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .context("GITHUB_TOKEN contains characters not allowed in a header")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .context("Failed to build HTTP client")?;

        Ok(HttpSource { client })
    }
}

#[async_trait]
impl JsonSource for HttpSource {
    async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        debug!(url, status = response.status().as_u16(), "GET");

        response
            .json::<Value>()
            .await
            .with_context(|| format!("Response from {} is not valid JSON", url))
    }
}

/// Fetches `url` if there is one.
///
/// A missing URL (e.g. an anonymous contributor has no profile) short-circuits
/// to `Ok(None)` without touching the network.
pub async fn fetch(source: &dyn JsonSource, url: Option<&str>) -> Result<Option<Value>> {
    match url {
        Some(url) => source.get_json(url).await.map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::testing::FakeSource;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_without_url_skips_request() {
        let source = FakeSource::new();
        let value = fetch(&source, None).await.unwrap();

        assert!(value.is_none());
        assert!(source.requests().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let source = FakeSource::new().with("https://api.test/users/a", json!({ "login": "a" }));
        let value = fetch(&source, Some("https://api.test/users/a")).await.unwrap();

        assert_eq!(value, Some(json!({ "login": "a" })));
        assert_eq!(source.requests(), vec!["https://api.test/users/a"]);
    }

    #[tokio::test]
    async fn test_fetch_propagates_errors() {
        let source = FakeSource::new().failing("https://api.test/users/a");
        assert!(fetch(&source, Some("https://api.test/users/a")).await.is_err());
    }

    #[test]
    fn test_http_source_rejects_bad_token() {
        assert!(HttpSource::new(Some("bad\ntoken"), Some(Duration::from_secs(1))).is_err());
    }

    #[test]
    fn test_http_source_builds() {
        assert!(HttpSource::new(Some("token"), Some(Duration::from_secs(1))).is_ok());
        assert!(HttpSource::new(None, None).is_ok());
    }
}
