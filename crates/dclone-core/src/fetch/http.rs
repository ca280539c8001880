//! reqwest-backed [`StatusSource`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use super::decode::decode_batch;
use super::errors::FetchError;
use super::traits::StatusSource;
use crate::servers::ServerSnapshot;

/// Fetches the full status batch from the dclone API with a bounded timeout.
#[derive(Debug, Clone)]
pub struct HttpStatusSource {
    client: reqwest::Client,
    url: String,
}

impl HttpStatusSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("dclone/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Network {
                message: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn map_request_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network {
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    async fn fetch(&self) -> Result<Vec<ServerSnapshot>, FetchError> {
        tracing::debug!(event = "core.fetch.request_started", url = %self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::RateLimited);
        }
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(map_request_error)?;
        let batch = decode_batch(&body)?;

        tracing::debug!(
            event = "core.fetch.request_completed",
            rows = batch.len(),
        );
        Ok(batch)
    }
}
