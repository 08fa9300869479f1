//! HTTP transport for the BADEA feed (native builds only).

use crate::cache::Transport;
use crate::error::FetchError;
use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use std::time::Duration;

/// Request timeout for the feed download.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(HttpTransport { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Bad response status for feed: {}", status);
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}
