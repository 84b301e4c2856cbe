//! reqwest-backed transport

use crate::config::HttpConfig;
use crate::error::{Error, Result};
use crate::transport::{Transport, TransportResponse};
use std::time::Duration;
use tracing::debug;

/// Default transport over a shared `reqwest::Client`
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the given HTTP settings
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an already configured client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, endpoint: &str, query: &[(String, String)]) -> Result<TransportResponse> {
        let response = self
            .client
            .get(endpoint)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response body: {}", e)))?;

        debug!(status, bytes = body.len(), "received response");

        Ok(TransportResponse {
            status,
            body: if body.is_empty() {
                None
            } else {
                Some(body.to_vec())
            },
        })
    }
}
