use anyhow::Result as AnyResult;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use tracing::debug;

use crate::error::{MonitorError, Result};
use crate::scrapers::PageFetcher;

/// Build a client that identifies as a desktop browser. No timeout is set, so
/// reqwest's default applies.
pub fn create_client(user_agent: &str) -> AnyResult<Client> {
    let client = ClientBuilder::new().user_agent(user_agent).build()?;

    Ok(client)
}

/// Single-attempt GET fetcher. Failures are returned to the caller as-is.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let request_error = |source| MonitorError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(MonitorError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(request_error)?;
        debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(body)
    }
}
