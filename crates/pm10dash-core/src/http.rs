//! HTTP fetcher adapters.
//!
//! `ReqwestFetcher` is the production adapter. `MemoryFetcher` serves canned
//! bodies and records every request; it backs the network-free tests and uses
//! `Mutex::unwrap()`, since a poisoned lock means a test thread already panicked.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{DensityError, Result};
use crate::ports::HttpFetcher;

/// Fetcher backed by a shared `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!(url, "GET");

        let response = self.client.get(url).send().await.map_err(|e| DensityError::Http {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DensityError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| DensityError::Http {
            url: url.to_string(),
            reason: format!("Failed to read response body: {}", e),
        })?;

        tracing::debug!(url, bytes = body.len(), "Response received");
        Ok(body.to_vec())
    }
}

#[derive(Debug, Clone)]
enum CannedResponse {
    Body(Vec<u8>),
    Status(u16),
}

/// In-memory fetcher with canned responses and a request log
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    routes: Mutex<HashMap<String, CannedResponse>>,
    requests: Mutex<Vec<String>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status 200 for `url`
    pub fn with_body(self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.routes.lock().unwrap().insert(url.into(), CannedResponse::Body(body.into()));
        self
    }

    /// Answer `url` with a non-success status
    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.routes.lock().unwrap().insert(url.into(), CannedResponse::Status(status));
        self
    }

    /// Number of requests made to `url`
    pub fn request_count(&self, url: &str) -> usize {
        self.requests.lock().unwrap().iter().filter(|u| u.as_str() == url).count()
    }

    /// Total number of requests made
    pub fn total_requests(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpFetcher for MemoryFetcher {
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(url.to_string());

        let route = self.routes.lock().unwrap().get(url).cloned();
        match route {
            Some(CannedResponse::Body(body)) => Ok(body),
            Some(CannedResponse::Status(status)) => Err(DensityError::HttpStatus {
                url: url.to_string(),
                status,
            }),
            None => Err(DensityError::Http {
                url: url.to_string(),
                reason: "connection refused".to_string(),
            }),
        }
    }
}
