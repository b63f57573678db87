// src/github/testing.rs
// =============================================================================
// An in-memory JsonSource for tests.
//
// Serves canned JSON per URL, records every request, and can make chosen
// URLs fail or answer late. Delays let tests make lookups finish in a
// different order than they were started.
// =============================================================================

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use super::JsonSource;

/// Unknown URLs and URLs marked as failing return an error.
#[derive(Default)]
pub struct FakeSource {
    responses: HashMap<String, Value>,
    failing: HashSet<String>,
    delays: HashMap<String, Duration>,
    requests: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: Value) -> Self {
        self.responses.insert(url.to_string(), body);
        self
    }

    pub fn failing(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    /// Answers `url` only after `delay` has passed.
    pub fn delayed(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    /// Requests in the order they were started.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl JsonSource for FakeSource {
    async fn get_json(&self, url: &str) -> Result<Value> {
        self.requests.lock().unwrap().push(url.to_string());

        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }

        if self.failing.contains(url) {
            return Err(anyhow!("connection reset while fetching {}", url));
        }

        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("no canned response for {}", url))
    }
}
