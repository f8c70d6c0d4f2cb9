use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use std::time::Duration;

use crate::application::watcher::ports::PageSource;
use crate::config::AppConfig;
use crate::infrastructure::page::error::FetchError;
use crate::utils::logging;

/// Browser-like User-Agent sent with every page request
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/107.0.0.0 Safari/537.36";

/// Client for fetching the company status page
pub struct PageClient {
    client: Client,
    url: String,
}

impl PageClient {
    /// Create a new page client
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(5)) // 5 second timeout
            .build()
            .map_err(|e| {
                FetchError::ClientError(format!("Failed to create HTTP client: {}", e))
            })?;
        let url = config.company.url.clone();

        Ok(PageClient { client, url })
    }
}

#[async_trait]
impl PageSource for PageClient {
    async fn fetch_status_page(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Non-2xx bodies are still handed to extraction
            logging::log_warning(&format!("Status page returned HTTP {}", status));
        }

        let body = response.text().await?;

        Ok(body)
    }
}
