use std::error::Error as _;
use std::time::Duration;

use reqwest::{Client, StatusCode};

use lastactive_common::error::{AppError, UpstreamError};

use crate::decode::{decode_time, decode_txids};

/// HTTP client for the block explorer API.
#[derive(Clone)]
pub struct ExplorerClient {
    base_url: String,
    client: Client,
}

impl ExplorerClient {
    /// `timeout` bounds each request, including reading the body.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build explorer client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Transaction ids for `address`, in the order the explorer lists them.
    pub async fn fetch_txids(&self, address: &str) -> Result<Vec<String>, UpstreamError> {
        let url = format!("{}/api/address/{}", self.base_url, address);
        let body = self.get(&url).await?;
        decode_txids(&body)
    }

    /// Epoch seconds of transaction `txid`.
    pub async fn fetch_tx_time(&self, txid: &str) -> Result<i64, UpstreamError> {
        let url = format!("{}/api/tx/{}", self.base_url, txid);
        let body = self.get(&url).await?;
        decode_time(&body)
    }

    async fn get(&self, url: &str) -> Result<Vec<u8>, UpstreamError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(describe(&e)))?;

        let status = resp.status();
        tracing::debug!(url, status = status.as_u16(), "Explorer GET");

        if status != StatusCode::OK {
            tracing::warn!(url, status = status.as_u16(), "Explorer returned non-200 status");
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = resp.bytes().await.map_err(|e| {
            UpstreamError::Transport(format!("error reading response body: {}", describe(&e)))
        })?;

        Ok(body.to_vec())
    }
}

/// reqwest errors hide the useful part (refused, dns, timeout) in their sources.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
